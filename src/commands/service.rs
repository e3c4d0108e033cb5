//! Service lifecycle: compose up/down and image removal.

use super::docker::{docker_compose, image_id};
use crate::info::Info;

pub fn start(info: &Info) -> String {
    format!("{} up --detach; cd $CWD", docker_compose(info))
}

pub fn stop(info: &Info) -> String {
    format!("{} down; cd $CWD", docker_compose(info))
}

pub fn restart(info: &Info) -> String {
    format!("{}; {}", stop(info), start(info))
}

pub fn remove_image(info: &Info) -> String {
    format!(
        "IMAGE_ID=$({}); docker image rm --force $IMAGE_ID",
        image_id(info)
    )
}

/// Stop the service, then remove its image.
pub fn destroy(info: &Info) -> String {
    format!("{}; {}", stop(info), remove_image(info))
}
