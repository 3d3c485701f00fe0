//! Pure transformations over member and class collections.
//!
//! Every function borrows its input and returns freshly allocated output, so
//! the caller's data is never modified.

pub mod classes;
pub mod members;
pub mod types;
pub mod values;

pub use classes::{
    count_classes_by_instructor, get_unique_classes, group_class_by_instructor,
    order_classes_by_title_and_level,
};
pub use members::{omit_age_from_members, remove_inactive_members};
pub use types::{
    ClassCount, ClassListing, ClassPrice, InstructorGroups, KeyValuePair, Level, Member,
    MemberProfile, NO_INSTRUCTOR_MESSAGE, YogaClass,
};
pub use values::{
    member_object_to_array, new_member_array_to_object, number_of_keys, number_of_record_keys,
    sum_numbers,
};
