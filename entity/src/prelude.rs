pub use super::category::Entity as Category;
pub use super::content::Entity as Content;
pub use super::content_category::Entity as ContentCategory;
pub use super::content_genre::Entity as ContentGenre;
pub use super::content_sponsor::Entity as ContentSponsor;
pub use super::genre::Entity as Genre;
pub use super::sponsor::Entity as Sponsor;
pub use super::user::Entity as User;
