use super::types::{ClassCount, ClassListing, ClassPrice, InstructorGroups, YogaClass};
use std::collections::{HashMap, HashSet};

/// Partitions classes by instructor.
///
/// Instructors appear in the order of their first class, and each group keeps
/// the input order of its classes.
pub fn group_class_by_instructor(classes: &[YogaClass]) -> InstructorGroups {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<YogaClass>)> = Vec::new();

    for class in classes {
        let slot = *positions.entry(class.instructor.as_str()).or_insert_with(|| {
            groups.push((class.instructor.clone(), Vec::new()));
            groups.len() - 1
        });
        if let Some((_, group)) = groups.get_mut(slot) {
            group.push(class.clone());
        }
    }

    log::debug!(
        "group_class_by_instructor: {} classes -> {} instructors",
        classes.len(),
        groups.len()
    );
    InstructorGroups::from_groups(groups)
}

/// Counts the classes taught by `instructor` (exact, case-sensitive match).
pub fn count_classes_by_instructor(classes: &[YogaClass], instructor: &str) -> ClassCount {
    let count = classes
        .iter()
        .filter(|class| class.instructor == instructor)
        .count();
    log::debug!("count_classes_by_instructor: {instructor:?} teaches {count}");
    ClassCount::from_count(count)
}

/// One entry per distinct title, priced by the first class with that title.
pub fn get_unique_classes(classes: &[YogaClass]) -> Vec<ClassPrice> {
    let mut seen: HashSet<&str> = HashSet::new();
    let unique: Vec<ClassPrice> = classes
        .iter()
        .filter(|class| seen.insert(class.title.as_str()))
        .map(|class| ClassPrice {
            title: class.title.clone(),
            price_in_cents: class.price_in_cents,
        })
        .collect();
    log::debug!(
        "get_unique_classes: {} classes -> {} titles",
        classes.len(),
        unique.len()
    );
    unique
}

/// Title ascending, then level descending. Equal keys keep input order.
pub fn order_classes_by_title_and_level(classes: &[YogaClass]) -> Vec<ClassListing> {
    let mut ordered: Vec<&YogaClass> = classes.iter().collect();
    ordered.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| b.level.cmp(&a.level)));

    let listings: Vec<ClassListing> = ordered
        .into_iter()
        .map(|class| ClassListing {
            title: class.title.clone(),
            instructor: class.instructor.clone(),
            level: class.level.clone(),
        })
        .collect();
    log::debug!("order_classes_by_title_and_level: {} classes", listings.len());
    listings
}
