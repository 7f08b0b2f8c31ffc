//! Story registration for inventory-based discovery.

/// A single story: one configured component rendered in one state.
pub struct StoryRegistration {
    /// Catalog path of the component, e.g. "Data Display/DataTable".
    pub title: &'static str,
    /// Story name within the component.
    pub name: &'static str,
    /// Render the story into text lines.
    pub render: fn() -> Vec<String>,
}

impl StoryRegistration {
    /// Create a new story registration.
    pub const fn new(title: &'static str, name: &'static str, render: fn() -> Vec<String>) -> Self {
        Self {
            title,
            name,
            render,
        }
    }

    /// "Title / Name", used for listing and filtering.
    pub fn path(&self) -> String {
        format!("{} / {}", self.title, self.name)
    }

    /// Whether the story matches a case-insensitive filter.
    pub fn matches(&self, filter: &str) -> bool {
        self.path().to_lowercase().contains(&filter.to_lowercase())
    }
}

inventory::collect!(StoryRegistration);

/// Get all registered stories, ordered by title then name.
pub fn registered_stories() -> Vec<&'static StoryRegistration> {
    let mut stories: Vec<_> = inventory::iter::<StoryRegistration>().collect();
    stories.sort_by_key(|s| (s.title, s.name));
    stories
}
