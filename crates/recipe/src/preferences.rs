use serde::Serialize;

/// Tags learned from every recipe ever favorited, in first-seen order.
///
/// The profile only grows: unfavoriting or deleting a recipe does not take
/// its tags back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceProfile {
    preferred_tags: Vec<String>,
}

impl PreferenceProfile {
    pub fn preferred_tags(&self) -> &[String] {
        &self.preferred_tags
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.preferred_tags.iter().any(|preferred| preferred == tag)
    }

    pub fn len(&self) -> usize {
        self.preferred_tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferred_tags.is_empty()
    }

    pub fn is_subset(&self, other: &PreferenceProfile) -> bool {
        self.preferred_tags.iter().all(|tag| other.contains(tag))
    }

    /// Set union with `tags`; returns how many tags were new.
    pub(crate) fn learn<'a>(&mut self, tags: impl IntoIterator<Item = &'a String>) -> usize {
        let mut learned = 0;

        for tag in tags {
            if !self.contains(tag) {
                self.preferred_tags.push(tag.to_owned());
                learned += 1;
            }
        }

        learned
    }
}
