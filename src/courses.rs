//! Direct catalog lookups: `catalog list` and `catalog show`.
//!
//! These bypass classification and retrieval and build the response from
//! the corpus directly, so they are unaffected by query phrasing.

use anyhow::Result;
use catalog_core::corpus::{normalize_code, Category};
use catalog_core::intent::Intent;
use catalog_core::render::OutputFormat;
use catalog_core::respond::{respond, Response};

use crate::assistant::ready_assistant;
use crate::config::Config;

pub async fn run_list(
    config: &Config,
    category: Option<Category>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let assistant = ready_assistant(config, format).await?;
    let response = respond(&Intent::ListCourses { category }, &[], assistant.corpus());
    println!("{}", assistant.format().render(&response)?);
    Ok(())
}

pub async fn run_show(config: &Config, code: &str, format: Option<OutputFormat>) -> Result<()> {
    let assistant = ready_assistant(config, format).await?;
    let response = match assistant.corpus().get(code) {
        Some(course) => Response::CourseDetail { course },
        None => Response::CourseNotFound {
            code: normalize_code(code),
        },
    };
    println!("{}", assistant.format().render(&response)?);
    Ok(())
}
