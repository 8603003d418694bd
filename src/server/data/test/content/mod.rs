use crate::server::{
    data::content::ContentRepository,
    error::{content::ContentError, AppError},
    model::content::{ContentChanges, NewContent},
};
use test_utils::{builder::TestBuilder, factory};

mod associate;
mod create;
mod delete;
mod find;
mod update;

fn new_content(creator_id: i32, title: &str) -> NewContent {
    NewContent {
        creator_id,
        title: title.to_string(),
        description: "description".to_string(),
        visibility: true,
        content_file_path: None,
        thumbnail_file_path: None,
    }
}
