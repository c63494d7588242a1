use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auto_store, body_type, brand, brand_model, listing, location, settings, slider, stock,
        user,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vehicle marketplace admin API",
        description = "Back office for the vehicle catalog, listing moderation and site settings"
    ),
    tags(
        (name = "brand", description = "Brands tagged with vehicle categories"),
        (name = "model", description = "Brand models tagged with vehicle categories"),
        (name = "body_type", description = "Body types tagged with vehicle categories"),
        (name = "listing", description = "Listing moderation"),
        (name = "stock", description = "Dealer stock entries"),
        (name = "auto_store", description = "Dealer storefronts"),
        (name = "user", description = "Marketplace accounts from the user service"),
        (name = "location", description = "Regions and cities"),
        (name = "slider", description = "Home page sliders"),
        (name = "settings", description = "Roles and admin accounts")
    )
)]
pub struct ApiDoc;

/// Builds every API route plus the Swagger UI at `/api/docs`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(brand::create_brand, brand::get_brands))
        .routes(routes!(
            brand::get_brand_by_id,
            brand::update_brand,
            brand::delete_brand
        ))
        .routes(routes!(brand::delete_brand_category))
        .routes(routes!(brand_model::create_model, brand_model::get_models))
        .routes(routes!(
            brand_model::get_model_by_id,
            brand_model::update_model,
            brand_model::delete_model
        ))
        .routes(routes!(brand_model::delete_model_category))
        .routes(routes!(
            body_type::create_body_type,
            body_type::get_body_types
        ))
        .routes(routes!(
            body_type::get_body_type_by_id,
            body_type::update_body_type,
            body_type::delete_body_type
        ))
        .routes(routes!(body_type::delete_body_type_category))
        .routes(routes!(listing::get_listings))
        .routes(routes!(listing::get_listing_by_id))
        .routes(routes!(listing::update_listing_status))
        .routes(routes!(stock::create_stock))
        .routes(routes!(stock::update_stock, stock::delete_stock))
        .routes(routes!(
            auto_store::create_auto_store,
            auto_store::get_auto_stores
        ))
        .routes(routes!(
            auto_store::get_auto_store,
            auto_store::update_auto_store,
            auto_store::delete_auto_store
        ))
        .routes(routes!(user::get_users))
        .routes(routes!(location::create_region, location::get_regions))
        .routes(routes!(
            location::get_region_by_id,
            location::update_region,
            location::delete_region
        ))
        .routes(routes!(location::create_city, location::get_cities))
        .routes(routes!(
            location::get_city_by_id,
            location::update_city,
            location::delete_city
        ))
        .routes(routes!(slider::create_slider, slider::get_sliders))
        .routes(routes!(
            slider::get_slider_by_id,
            slider::update_slider,
            slider::delete_slider
        ))
        .routes(routes!(settings::create_role, settings::get_roles))
        .routes(routes!(
            settings::get_role_by_id,
            settings::update_role,
            settings::delete_role
        ))
        .routes(routes!(
            settings::create_admin_user,
            settings::get_admin_users
        ))
        .routes(routes!(
            settings::get_admin_user_by_id,
            settings::update_admin_user,
            settings::delete_admin_user
        ))
        .with_state(state)
        .split_for_parts();

    let docs = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api);

    router
        .merge(docs)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
