use crate::server::{
    data::listing::{ListingRepository, ListingStatusStore},
    model::listing::{Listing, ListingFilter, ListingKind, ListingStatus},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod owner_of;
mod update_status;
