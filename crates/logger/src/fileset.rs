//! crates/logger/src/fileset.rs
//! File-collection contract and its debug rendering.

use std::fmt::{self, Display};

use crate::level::DebugLevel;
use crate::summary::summarize_list;

/// Project location carried by a rooted file collection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProjectRoot<'a> {
    /// Repository URL of the owning project.
    pub url: &'a str,
    /// Local checkout root of the owning project.
    pub root: &'a str,
}

/// Tree of files as seen by the debug formatter.
///
/// Each node holds an ordered list of leaf items, an optional tag, and
/// ordered child nodes. Rooted nodes also report the project they belong to.
pub trait FileCollection: Sized {
    /// Leaf item type, usually a path.
    type Item: Display;

    /// Optional label for the collection.
    fn tag(&self) -> Option<&str>;

    /// Leaf items directly held by this node.
    fn items(&self) -> &[Self::Item];

    /// Child collections, in order.
    fn children(&self) -> &[Self];

    /// Project location for rooted collections.
    fn project_root(&self) -> Option<ProjectRoot<'_>> {
        None
    }
}

/// Input accepted by [`Logger::debug_file_set_str`](crate::Logger::debug_file_set_str).
pub enum FileSetRef<'a, F: FileCollection> {
    /// A file collection, rendered recursively.
    Set(&'a F),
    /// A plain list of items.
    List(&'a [F::Item]),
    /// Anything else; rendering fails with `InvalidInput`.
    Other(&'a dyn fmt::Debug),
}

impl<'a, T: Display> FileSetRef<'a, FileSet<T>> {
    /// Wraps a plain list without naming a collection type.
    pub fn list(items: &'a [T]) -> Self {
        Self::List(items)
    }
}

impl<'a> FileSetRef<'a, FileSet<String>> {
    /// Wraps a value that is neither a collection nor a list.
    pub fn other(value: &'a dyn fmt::Debug) -> Self {
        Self::Other(value)
    }
}

impl<'a, F: FileCollection> From<&'a F> for FileSetRef<'a, F> {
    fn from(set: &'a F) -> Self {
        Self::Set(set)
    }
}

/// Renders a file collection and its descendants.
///
/// Output is `(tag)` when tagged, `(url)(root)` when rooted, the summarized
/// item list, then `, ` followed by each child's rendering in order.
#[must_use]
pub fn render_file_set<F: FileCollection>(level: DebugLevel, set: &F) -> String {
    let mut out = String::new();
    render_into(level, set, &mut out);
    out
}

fn render_into<F: FileCollection>(level: DebugLevel, set: &F, out: &mut String) {
    if let Some(tag) = set.tag().filter(|tag| !tag.is_empty()) {
        push_group(out, tag);
    }
    if let Some(project) = set.project_root() {
        push_group(out, project.url);
        push_group(out, project.root);
    }
    out.push_str(&summarize_list(level, set.items()));
    for child in set.children() {
        out.push_str(", ");
        render_into(level, child, out);
    }
}

fn push_group(out: &mut String, text: &str) {
    out.push('(');
    out.push_str(text);
    out.push(')');
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ProjectLocation {
    url: String,
    root: String,
}

/// Owned file collection, optionally tagged and rooted at a project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSet<T> {
    items: Vec<T>,
    tag: Option<String>,
    children: Vec<FileSet<T>>,
    project: Option<ProjectLocation>,
}

impl<T> FileSet<T> {
    /// Creates an untagged, unrooted set holding `items`.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            tag: None,
            children: Vec::new(),
            project: None,
        }
    }

    /// Creates a set rooted at a project checkout.
    pub fn rooted(
        url: impl Into<String>,
        root: impl Into<String>,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        let mut set = Self::new(items);
        set.project = Some(ProjectLocation {
            url: url.into(),
            root: root.into(),
        });
        set
    }

    /// Sets the tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Appends a child set.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends an item.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends a child set.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Number of items held directly by this set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Reports whether this set holds no items directly.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items held directly by this set.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for FileSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, T> IntoIterator for &'a FileSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Display> FileCollection for FileSet<T> {
    type Item = T;

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn items(&self) -> &[T] {
        &self.items
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn project_root(&self) -> Option<ProjectRoot<'_>> {
        self.project.as_ref().map(|project| ProjectRoot {
            url: &project.url,
            root: &project.root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: u8) -> DebugLevel {
        DebugLevel::new(value).unwrap()
    }

    #[test]
    fn plain_set_renders_items_only() {
        let set = FileSet::new(["a.c", "b.c"]);
        assert_eq!(render_file_set(level(1), &set), "[a.c, b.c]");
    }

    #[test]
    fn empty_tag_is_omitted() {
        let set = FileSet::new([1]).with_tag("");
        assert_eq!(render_file_set(level(1), &set), "[1]");
    }

    #[test]
    fn rooted_set_renders_tag_then_project() {
        let set = FileSet::rooted("u", "r", [1, 2, 3])
            .with_tag("t")
            .with_child(FileSet::new([4, 5, 6, 7, 8]).with_tag("c"));
        assert_eq!(
            render_file_set(level(1), &set),
            "(t)(u)(r)[1, 2, 3], (c)[4-<3>-8]"
        );
    }

    #[test]
    fn children_render_depth_first_in_order() {
        let set = FileSet::new([0])
            .with_child(FileSet::new([1]).with_child(FileSet::new([2])))
            .with_child(FileSet::new([3]));
        assert_eq!(render_file_set(level(1), &set), "[0], [1], [2], [3]");
    }

    #[test]
    fn builder_helpers_update_contents() {
        let mut set: FileSet<&str> = std::iter::empty().collect();
        assert!(set.is_empty());
        set.push("x.o");
        set.push_child(FileSet::new(["y.o"]));
        assert_eq!(set.len(), 1);
        assert_eq!((&set).into_iter().copied().collect::<Vec<_>>(), vec!["x.o"]);
        assert_eq!(set.children().len(), 1);
        assert_eq!(set.project_root(), None);
    }

    #[test]
    fn plain_inputs_need_no_collection_type() {
        assert!(matches!(
            FileSetRef::list(&["a.c", "b.c"]),
            FileSetRef::List(items) if items.len() == 2
        ));
        assert!(matches!(FileSetRef::other(&42), FileSetRef::Other(_)));
    }
}
