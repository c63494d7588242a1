//! Tagged catalog entities: brands, models and body types.
//!
//! Each domain model carries the full category set read back from `category_tag`.
//! Create and update parameters carry a validated `CategorySet` that replaces the
//! stored set wholesale.

use chrono::{DateTime, Utc};

use crate::{
    model::catalog::{
        BodyTypeDto, BrandDto, BrandModelDto, PaginatedBodyTypesDto, PaginatedBrandModelsDto,
        PaginatedBrandsDto, SaveBodyTypeDto, SaveBrandDto, SaveBrandModelDto,
    },
    server::model::{
        category::{CategoryError, CategorySet, VehicleCategory},
        page::Page,
    },
};

fn labels(categories: Vec<VehicleCategory>) -> Vec<String> {
    categories
        .into_iter()
        .map(|category| category.as_str().to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub logo_path: Option<String>,
    pub categories: Vec<VehicleCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Brand {
    /// Converts an entity model and its tag rows at the repository boundary.
    pub fn from_entity(entity: entity::brand::Model, categories: Vec<VehicleCategory>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            logo_path: entity.logo_path,
            categories,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BrandDto {
        BrandDto {
            id: self.id,
            name: self.name,
            logo_path: self.logo_path,
            categories: labels(self.categories),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Fields written on brand create and update.
#[derive(Debug, Clone)]
pub struct BrandParams {
    pub name: String,
    pub logo_path: Option<String>,
    pub categories: CategorySet,
}

impl BrandParams {
    pub fn from_dto(dto: SaveBrandDto) -> Result<Self, CategoryError> {
        Ok(Self {
            categories: CategorySet::parse(&dto.categories)?,
            name: dto.name,
            logo_path: dto.logo_path,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrandModel {
    pub id: i32,
    pub brand_id: i32,
    pub body_type_id: Option<i32>,
    pub name: String,
    pub categories: Vec<VehicleCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BrandModel {
    pub fn from_entity(
        entity: entity::brand_model::Model,
        categories: Vec<VehicleCategory>,
    ) -> Self {
        Self {
            id: entity.id,
            brand_id: entity.brand_id,
            body_type_id: entity.body_type_id,
            name: entity.name,
            categories,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BrandModelDto {
        BrandModelDto {
            id: self.id,
            brand_id: self.brand_id,
            body_type_id: self.body_type_id,
            name: self.name,
            categories: labels(self.categories),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrandModelParams {
    pub brand_id: i32,
    pub body_type_id: Option<i32>,
    pub name: String,
    pub categories: CategorySet,
}

impl BrandModelParams {
    pub fn from_dto(dto: SaveBrandModelDto) -> Result<Self, CategoryError> {
        Ok(Self {
            categories: CategorySet::parse(&dto.categories)?,
            brand_id: dto.brand_id,
            body_type_id: dto.body_type_id,
            name: dto.name,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyType {
    pub id: i32,
    pub name: String,
    pub image_path: Option<String>,
    pub categories: Vec<VehicleCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BodyType {
    pub fn from_entity(entity: entity::body_type::Model, categories: Vec<VehicleCategory>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image_path: entity.image_path,
            categories,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BodyTypeDto {
        BodyTypeDto {
            id: self.id,
            name: self.name,
            image_path: self.image_path,
            categories: labels(self.categories),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BodyTypeParams {
    pub name: String,
    pub image_path: Option<String>,
    pub categories: CategorySet,
}

impl BodyTypeParams {
    pub fn from_dto(dto: SaveBodyTypeDto) -> Result<Self, CategoryError> {
        Ok(Self {
            categories: CategorySet::parse(&dto.categories)?,
            name: dto.name,
            image_path: dto.image_path,
        })
    }
}

impl Page<Brand> {
    pub fn into_dto(self) -> PaginatedBrandsDto {
        let total_pages = self.total_pages();
        PaginatedBrandsDto {
            brands: self.items.into_iter().map(Brand::into_dto).collect(),
            total: self.total,
            page: self.page + 1,
            per_page: self.per_page,
            total_pages,
        }
    }
}

impl Page<BrandModel> {
    pub fn into_dto(self) -> PaginatedBrandModelsDto {
        let total_pages = self.total_pages();
        PaginatedBrandModelsDto {
            models: self.items.into_iter().map(BrandModel::into_dto).collect(),
            total: self.total,
            page: self.page + 1,
            per_page: self.per_page,
            total_pages,
        }
    }
}

impl Page<BodyType> {
    pub fn into_dto(self) -> PaginatedBodyTypesDto {
        let total_pages = self.total_pages();
        PaginatedBodyTypesDto {
            body_types: self.items.into_iter().map(BodyType::into_dto).collect(),
            total: self.total,
            page: self.page + 1,
            per_page: self.per_page,
            total_pages,
        }
    }
}

/// Listing query shared by the three catalog endpoints.
#[derive(Debug, Clone)]
pub struct CategoryQuery {
    pub category: VehicleCategory,
    pub search: Option<String>,
    /// Zero-based page index.
    pub page: u64,
    pub per_page: u64,
}
