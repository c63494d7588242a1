pub use super::admin_user::Entity as AdminUser;
pub use super::auto_store::Entity as AutoStore;
pub use super::body_type::Entity as BodyType;
pub use super::brand::Entity as Brand;
pub use super::brand_model::Entity as BrandModel;
pub use super::car::Entity as Car;
pub use super::category_tag::Entity as CategoryTag;
pub use super::city::Entity as City;
pub use super::moto::Entity as Moto;
pub use super::region::Entity as Region;
pub use super::role::Entity as Role;
pub use super::slider::Entity as Slider;
pub use super::stock::Entity as Stock;
pub use super::truck::Entity as Truck;
