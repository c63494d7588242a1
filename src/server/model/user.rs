use crate::{
    model::user::{MarketplaceUserDto, PaginatedMarketplaceUsersDto},
    server::{model::page::Page, service::user_directory::MarketplaceUser},
};

pub fn marketplace_user_dto(user: MarketplaceUser) -> MarketplaceUserDto {
    MarketplaceUserDto {
        id: user.id,
        full_name: user.full_name,
        email: user.email,
        phone_number: user.phone_number,
        avatar: user.avatar,
    }
}

impl Page<MarketplaceUser> {
    pub fn into_dto(self) -> PaginatedMarketplaceUsersDto {
        let total_pages = self.total_pages();
        PaginatedMarketplaceUsersDto {
            users: self.items.into_iter().map(marketplace_user_dto).collect(),
            total: self.total,
            page: self.page + 1,
            per_page: self.per_page,
            total_pages,
        }
    }
}
