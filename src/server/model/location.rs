use crate::{
    model::location::{
        CityDto, PaginatedCitiesDto, PaginatedRegionsDto, RegionDto, SaveCityDto, SaveRegionDto,
    },
    server::model::page::Page,
};

/// Region names in Turkmen, English and Russian.
#[derive(Debug, Clone)]
pub struct RegionParams {
    pub name_tm: String,
    pub name_en: String,
    pub name_ru: String,
}

#[derive(Debug, Clone)]
pub struct CityParams {
    pub region_id: i32,
    pub name_tm: String,
    pub name_en: String,
    pub name_ru: String,
}

impl From<SaveRegionDto> for RegionParams {
    fn from(dto: SaveRegionDto) -> Self {
        Self {
            name_tm: dto.name_tm,
            name_en: dto.name_en,
            name_ru: dto.name_ru,
        }
    }
}

impl From<SaveCityDto> for CityParams {
    fn from(dto: SaveCityDto) -> Self {
        Self {
            region_id: dto.region_id,
            name_tm: dto.name_tm,
            name_en: dto.name_en,
            name_ru: dto.name_ru,
        }
    }
}

pub fn region_dto(entity: entity::region::Model) -> RegionDto {
    RegionDto {
        id: entity.id,
        name_tm: entity.name_tm,
        name_en: entity.name_en,
        name_ru: entity.name_ru,
    }
}

pub fn city_dto(entity: entity::city::Model) -> CityDto {
    CityDto {
        id: entity.id,
        region_id: entity.region_id,
        name_tm: entity.name_tm,
        name_en: entity.name_en,
        name_ru: entity.name_ru,
    }
}

impl Page<entity::region::Model> {
    pub fn into_dto(self) -> PaginatedRegionsDto {
        let total_pages = self.total_pages();
        PaginatedRegionsDto {
            regions: self.items.into_iter().map(region_dto).collect(),
            total: self.total,
            page: self.page + 1,
            per_page: self.per_page,
            total_pages,
        }
    }
}

impl Page<entity::city::Model> {
    pub fn into_dto(self) -> PaginatedCitiesDto {
        let total_pages = self.total_pages();
        PaginatedCitiesDto {
            cities: self.items.into_iter().map(city_dto).collect(),
            total: self.total,
            page: self.page + 1,
            per_page: self.per_page,
            total_pages,
        }
    }
}
