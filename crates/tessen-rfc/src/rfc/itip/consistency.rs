//! ## Summary
//! Cross-component consistency checks.
//!
//! An iTIP message describes a single calendar item: every top-level
//! scheduling component carries the same UID, no recurrence instance is
//! described twice, and overridden instances do not fall behind the master's
//! SEQUENCE. An overridden instance is only meaningful when its master, if
//! carried in the same object, recurs. Components whose UID is missing or repeated are skipped here,
//! since the per-component rules already report them.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use super::ValidationOptions;
use super::report::Collector;
use super::violation::ValidationViolation;
use crate::rfc::ical::core::{Component, PropertyKind};

/// A top-level component together with its position in the calendar object.
pub(crate) type Indexed<'a> = (usize, &'a Component);

/// Runs every consistency check over the scheduling components.
pub(crate) fn check(components: &[Indexed<'_>], options: ValidationOptions, out: &mut Collector) {
    check_uids(components, out);
    check_instances(components, out);

    let masters = masters(components);
    check_recurrence(components, &masters, out);
    if options.check_sequence_ordering {
        check_sequences(components, &masters, out);
    }
}

/// Maps each UID to the first component without RECURRENCE-ID.
fn masters<'a>(components: &[Indexed<'a>]) -> HashMap<Cow<'a, str>, &'a Component> {
    let mut masters = HashMap::new();
    for &(_, component) in components {
        if let Some(uid) = sole_uid(component)
            && component.recurrence_id().is_none()
        {
            masters.entry(uid).or_insert(component);
        }
    }
    masters
}

/// Yields the overridden instances whose master is present, with their UID.
fn overrides<'a, 'm>(
    components: &'a [Indexed<'a>],
    masters: &'m HashMap<Cow<'a, str>, &'a Component>,
) -> impl Iterator<Item = (usize, &'a Component, Cow<'a, str>, &'a Component)> {
    components.iter().filter_map(move |&(index, component)| {
        let uid = sole_uid(component)?;
        if component.recurrence_id().is_none() {
            return None;
        }
        let master = *masters.get(uid.as_ref())?;
        Some((index, component, uid, master))
    })
}

/// Returns the UID when the component carries exactly one.
fn sole_uid(component: &Component) -> Option<Cow<'_, str>> {
    if component.count_properties(PropertyKind::Uid) == 1 {
        component.uid()
    } else {
        None
    }
}

fn check_uids(components: &[Indexed<'_>], out: &mut Collector) {
    let mut expected: Option<Cow<'_, str>> = None;

    for &(index, component) in components {
        if out.is_done() {
            return;
        }
        let Some(uid) = sole_uid(component) else {
            continue;
        };
        let Some(first) = expected.as_deref() else {
            expected = Some(uid);
            continue;
        };
        if first != uid {
            out.push(ValidationViolation::InconsistentIdentifier {
                expected: first.to_string(),
                found: uid.into_owned(),
                component_index: index,
            });
        }
    }
}

fn check_instances(components: &[Indexed<'_>], out: &mut Collector) {
    let mut seen: HashSet<(Cow<'_, str>, Option<String>)> = HashSet::new();

    for &(index, component) in components {
        if out.is_done() {
            return;
        }
        let Some(uid) = sole_uid(component) else {
            continue;
        };
        let recurrence_id = component.recurrence_id();
        if !seen.insert((uid.clone(), recurrence_id.clone())) {
            out.push(ValidationViolation::DuplicateInstance {
                uid: uid.into_owned(),
                recurrence_id,
                component_index: index,
            });
        }
    }
}

fn check_recurrence(
    components: &[Indexed<'_>],
    masters: &HashMap<Cow<'_, str>, &Component>,
    out: &mut Collector,
) {
    for (index, component, uid, master) in overrides(components, masters) {
        if out.is_done() {
            return;
        }
        let recurs = master.count_properties(PropertyKind::RRule) > 0
            || master.count_properties(PropertyKind::RDate) > 0;
        if !recurs {
            out.push(ValidationViolation::NonRecurringMaster {
                uid: uid.into_owned(),
                recurrence_id: component.recurrence_id().unwrap_or_default(),
                component_index: index,
            });
        }
    }
}

fn check_sequences(
    components: &[Indexed<'_>],
    masters: &HashMap<Cow<'_, str>, &Component>,
    out: &mut Collector,
) {
    for (index, component, uid, master) in overrides(components, masters) {
        if out.is_done() {
            return;
        }
        let master = master.sequence().unwrap_or(0);
        let instance = component.sequence().unwrap_or(0);
        if instance < master {
            out.push(ValidationViolation::SequenceRegression {
                uid: uid.into_owned(),
                master,
                instance,
                component_index: index,
            });
        }
    }
}
