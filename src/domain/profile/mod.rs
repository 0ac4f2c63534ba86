pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewProfile, Profile, ProfileUpdate};
pub use repository::ProfileRepository;
pub use value_objects::{
    Bio, MAX_BIO_LENGTH, MAX_TAG_LENGTH, PhotoPath, ProfileId, ProfileSlug, RESERVED_SLUGS,
    SiteUrl, Tag, user_avatar_path,
};
