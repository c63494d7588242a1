//! Listing kinds, moderation statuses and status-transition parameters.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    model::listing::{
        CarDto, ListingDto, ListingStatusChangedDto, MotoDto, PaginatedListingsDto, SaveStockDto,
        StockDto, TruckDto,
    },
    server::{error::AppError, model::page::Page},
};

/// Listing tables that share the moderation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Car,
    Moto,
    Truck,
    Stock,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Moto => "moto",
            Self::Truck => "truck",
            Self::Stock => "stock",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingKind {
    type Err = AppError;

    /// Accepts both the singular and the plural route segment (`car`, `cars`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "car" | "cars" => Ok(Self::Car),
            "moto" | "motos" => Ok(Self::Moto),
            "truck" | "trucks" => Ok(Self::Truck),
            "stock" | "stocks" => Ok(Self::Stock),
            other => Err(AppError::BadRequest(format!(
                "Unknown listing kind '{}', expected one of: car, moto, truck, stock",
                other
            ))),
        }
    }
}

/// Moderation status of a listing.
///
/// Any status may be written over any other; there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingStatus {
    Pending,
    Accepted,
    Blocked,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "blocked" => Ok(Self::Blocked),
            other => Err(AppError::BadRequest(format!(
                "Unknown status '{}', expected one of: pending, accepted, blocked",
                other
            ))),
        }
    }
}

/// A requested status change for a single listing.
#[derive(Debug, Clone)]
pub struct StatusTransition {
    pub kind: ListingKind,
    pub listing_id: i32,
    pub status: ListingStatus,
    /// Notification text forwarded verbatim to the owner.
    pub message: String,
}

/// Outcome of a committed status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub kind: ListingKind,
    pub listing_id: i32,
    pub status: ListingStatus,
    pub owner_id: i64,
}

/// Payload posted to the push gateway. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRequest {
    pub message: String,
    pub token: String,
}

/// Read-side filter for listing pages.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub status: Option<ListingStatus>,
    pub search: Option<String>,
}

impl StatusChange {
    pub fn into_dto(self) -> ListingStatusChangedDto {
        ListingStatusChangedDto {
            kind: self.kind.as_str().to_string(),
            id: self.listing_id,
            status: self.status.as_str().to_string(),
            owner_id: self.owner_id,
        }
    }
}

/// A listing row of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Car(entity::car::Model),
    Moto(entity::moto::Model),
    Truck(entity::truck::Model),
    Stock(entity::stock::Model),
}

impl Listing {
    pub fn into_dto(self) -> ListingDto {
        match self {
            Self::Car(car) => ListingDto::Car(CarDto {
                id: car.id,
                user_id: car.user_id,
                status: car.status,
                brand_id: car.brand_id,
                model_id: car.model_id,
                year: car.year,
                price: car.price,
                vin: car.vin,
                description: car.description,
                created_at: car.created_at,
                updated_at: car.updated_at,
            }),
            Self::Moto(moto) => ListingDto::Moto(MotoDto {
                id: moto.id,
                user_id: moto.user_id,
                status: moto.status,
                brand_id: moto.brand_id,
                model_id: moto.model_id,
                year: moto.year,
                price: moto.price,
                description: moto.description,
                created_at: moto.created_at,
                updated_at: moto.updated_at,
            }),
            Self::Truck(truck) => ListingDto::Truck(TruckDto {
                id: truck.id,
                user_id: truck.user_id,
                status: truck.status,
                brand_id: truck.brand_id,
                model_id: truck.model_id,
                year: truck.year,
                price: truck.price,
                load_capacity: truck.load_capacity,
                description: truck.description,
                created_at: truck.created_at,
                updated_at: truck.updated_at,
            }),
            Self::Stock(stock) => ListingDto::Stock(stock_dto(stock)),
        }
    }
}

pub fn stock_dto(stock: entity::stock::Model) -> StockDto {
    StockDto {
        id: stock.id,
        user_id: stock.user_id,
        status: stock.status,
        store_name: stock.store_name,
        phone_number: stock.phone_number,
        email: stock.email,
        address: stock.address,
        region_id: stock.region_id,
        city_id: stock.city_id,
        description: stock.description,
        created_at: stock.created_at,
        updated_at: stock.updated_at,
    }
}

/// Columns of a dealer stock entry written by the back office.
///
/// `status` is only used on create; later changes go through [`StatusTransition`]
/// so the owner is notified.
#[derive(Debug, Clone)]
pub struct StockParams {
    pub user_id: i64,
    pub status: ListingStatus,
    pub store_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: String,
    pub region_id: Option<i32>,
    pub city_id: Option<i32>,
    pub description: Option<String>,
}

impl StockParams {
    pub fn from_dto(dto: SaveStockDto) -> Result<Self, AppError> {
        let status = match dto.status.as_deref() {
            Some(status) => status.parse()?,
            None => ListingStatus::Pending,
        };

        Ok(Self {
            user_id: dto.user_id,
            status,
            store_name: dto.store_name,
            phone_number: dto.phone_number,
            email: dto.email,
            address: dto.address,
            region_id: dto.region_id,
            city_id: dto.city_id,
            description: dto.description,
        })
    }
}

impl Page<Listing> {
    pub fn into_dto(self) -> PaginatedListingsDto {
        let total_pages = self.total_pages();
        PaginatedListingsDto {
            listings: self.items.into_iter().map(Listing::into_dto).collect(),
            total: self.total,
            page: self.page + 1,
            per_page: self.per_page,
            total_pages,
        }
    }
}
