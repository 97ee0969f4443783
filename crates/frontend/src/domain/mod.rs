pub mod a001_post;
pub mod a002_comment;
pub mod a003_category;
pub mod a004_tag;
pub mod a005_media_file;
pub mod a006_subscriber;
pub mod a007_campaign;
pub mod a008_email;
