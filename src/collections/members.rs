use super::types::{Member, MemberProfile};

/// Copies every member without the `age` field.
pub fn omit_age_from_members(members: &[Member]) -> Vec<MemberProfile> {
    let profiles: Vec<MemberProfile> = members.iter().map(MemberProfile::from).collect();
    log::debug!("omit_age_from_members: {} members", profiles.len());
    profiles
}

/// Keeps only current members, in their original order.
pub fn remove_inactive_members(members: &[Member]) -> Vec<Member> {
    let active: Vec<Member> = members.iter().filter(|m| m.is_active()).cloned().collect();
    log::debug!(
        "remove_inactive_members: {} of {} members are current",
        active.len(),
        members.len()
    );
    active
}
