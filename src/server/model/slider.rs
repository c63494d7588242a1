use crate::{
    model::slider::{PaginatedSlidersDto, SaveSliderDto, SliderDto},
    server::model::page::Page,
};

#[derive(Debug, Clone)]
pub struct SliderParams {
    pub title: String,
    pub image_path: String,
    /// Client platform the slider is shown on, e.g. `web` or `mobile`.
    pub platform: String,
}

/// Optional narrowing of the slider list.
#[derive(Debug, Clone, Default)]
pub struct SliderFilter {
    /// Exact platform name; blank means every platform.
    pub platform: Option<String>,
    /// Substring of the title.
    pub search: Option<String>,
}

impl SliderFilter {
    pub fn new(platform: Option<String>, search: Option<String>) -> Self {
        let platform = platform
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Self { platform, search }
    }
}

impl From<SaveSliderDto> for SliderParams {
    fn from(dto: SaveSliderDto) -> Self {
        Self {
            title: dto.title,
            image_path: dto.image_path,
            platform: dto.platform,
        }
    }
}

pub fn slider_dto(entity: entity::slider::Model) -> SliderDto {
    SliderDto {
        id: entity.id,
        title: entity.title,
        image_path: entity.image_path,
        platform: entity.platform,
        created_at: entity.created_at,
    }
}

impl Page<entity::slider::Model> {
    pub fn into_dto(self) -> PaginatedSlidersDto {
        let total_pages = self.total_pages();
        PaginatedSlidersDto {
            sliders: self.items.into_iter().map(slider_dto).collect(),
            total: self.total,
            page: self.page + 1,
            per_page: self.per_page,
            total_pages,
        }
    }
}
