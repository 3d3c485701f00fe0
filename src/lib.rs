//! # Roster - member and class record utilities for a yoga studio
//!
//! Roster is a small library of pure transformations over collections of
//! studio members and yoga classes: filtering, grouping, deduplicating,
//! projecting and sorting.
//!
//! ## Quick Start
//!
//! ```no_run
//! use roster::fixtures::Fixtures;
//! use std::path::Path;
//!
//! # fn example() -> roster::error::Result<()> {
//! let fixtures = Fixtures::load(Path::new("data"))?;
//!
//! let groups = roster::group_class_by_instructor(&fixtures.yoga_classes);
//! for (instructor, classes) in groups.iter() {
//!     println!("{instructor} teaches {} classes", classes.len());
//! }
//!
//! match roster::count_classes_by_instructor(&fixtures.yoga_classes, "Pat") {
//!     roster::ClassCount::Found(n) => println!("Pat teaches {n}"),
//!     roster::ClassCount::NotFound => println!("{}", roster::NO_INSTRUCTOR_MESSAGE),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`collections`]: the transformations and the record types they work on
//! - [`fixtures`]: loading the static JSON fixture files
//! - [`config`]: the `roster.json` configuration file
//! - [`error`]: error type and context helpers
//! - [`logging`]: logger initialisation for binaries
//!
//! ## No mutation
//!
//! Every transformation borrows its input (`&[Member]`, `&[YogaClass]`,
//! `&[Value]`) and returns new values, so the compiler guarantees the
//! caller's collections are left as they were.

#![warn(clippy::all, rust_2018_idioms)]

pub mod collections;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;

pub use collections::{
    ClassCount, ClassListing, ClassPrice, InstructorGroups, KeyValuePair, Level, Member,
    MemberProfile, NO_INSTRUCTOR_MESSAGE, YogaClass, count_classes_by_instructor,
    get_unique_classes, group_class_by_instructor, member_object_to_array,
    new_member_array_to_object, number_of_keys, number_of_record_keys, omit_age_from_members,
    order_classes_by_title_and_level, remove_inactive_members, sum_numbers,
};
