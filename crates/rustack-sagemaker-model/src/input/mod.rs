//! SageMaker request shapes, one per operation.
//!
//! Every `List*` request pages with `NextToken` (at most 8192 characters)
//! and `MaxResults` (1 to 100).

mod experiment;
mod human;
mod monitoring;
mod notebook;
mod registry;
mod training;
mod transform;
mod tuning;

pub use experiment::*;
pub use human::*;
pub use monitoring::*;
pub use notebook::*;
pub use registry::*;
pub use training::*;
pub use transform::*;
pub use tuning::*;

use crate::patterns::ANY_TEXT;
use crate::types::Tag;
use crate::validate::Validator;

fn check_page(v: &mut Validator, next_token: Option<&str>, max_results: Option<i32>) {
    v.string("NextToken", next_token)
        .length(0, 8192)
        .pattern(&ANY_TEXT);
    v.int("MaxResults", max_results).range(1, 100);
}

fn check_tags(v: &mut Validator, tags: Option<&[Tag]>) {
    v.list("Tags", tags).length(0, 50).each();
}
