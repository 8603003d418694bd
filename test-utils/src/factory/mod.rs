//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let creator = factory::create_user(&db).await?;
//! let content = factory::create_content(&db, creator.id).await?;
//! let genre = factory::create_genre(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("root")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod content;
pub mod genre;
pub mod helpers;
pub mod sponsor;
pub mod user;

pub use category::create_category;
pub use content::create_content;
pub use genre::create_genre;
pub use sponsor::create_sponsor;
pub use user::create_user;
