// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visual tree returned by chart renderers.

extern crate alloc;

use alloc::vec::Vec;
use core::slice;
use core::time::Duration;

use kurbo::Rect;
use peniko::Brush;

use crate::mark::{Mark, MarkId};

/// A cluster of nodes drawn as one visual band.
///
/// Groups are purely presentational: they carry a frame, an optional background fill, and an
/// opacity that applies to everything inside them.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    /// Stable group id.
    pub id: MarkId,
    /// The group frame in scene coordinates.
    pub frame: Rect,
    /// Optional background fill covering `frame`.
    pub background: Option<Brush>,
    /// Group opacity in `[0, 1]`.
    pub opacity: f32,
    /// Child nodes, in paint order.
    pub children: Vec<Node>,
}

impl Group {
    /// Creates an empty, fully opaque group without a background.
    pub fn new(id: MarkId, frame: Rect) -> Self {
        Self {
            id,
            frame,
            background: None,
            opacity: 1.0,
            children: Vec::new(),
        }
    }

    /// Sets the background fill.
    pub fn with_background(mut self, background: impl Into<Brush>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Sets the group opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Appends a mark.
    pub fn push_mark(&mut self, mark: Mark) {
        self.children.push(Node::Mark(mark));
    }

    /// Appends marks.
    pub fn extend_marks(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.children.extend(marks.into_iter().map(Node::Mark));
    }

    /// Appends a nested group. Its opacity composes with this group's.
    pub fn push_group(&mut self, group: Self) {
        self.children.push(Node::Group(group));
    }

    /// Iterates all marks inside this group, depth first.
    pub fn marks(&self) -> Marks<'_> {
        Marks::new(&self.children)
    }
}

/// A node in a [`RenderedVisual`].
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A leaf mark.
    Mark(Mark),
    /// A nested group.
    Group(Group),
}

/// The output of a chart renderer.
///
/// `view` is the extent the visual was laid out in; hosts place it into their page region by
/// mapping `view` onto that region.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedVisual {
    /// The layout extent in scene coordinates.
    pub view: Rect,
    /// Top-level nodes, in paint order.
    pub nodes: Vec<Node>,
}

impl Default for RenderedVisual {
    fn default() -> Self {
        Self::empty()
    }
}

impl RenderedVisual {
    /// A visual that renders nothing.
    pub fn empty() -> Self {
        Self {
            view: Rect::ZERO,
            nodes: Vec::new(),
        }
    }

    /// Creates an empty visual with the given view extent.
    pub fn new(view: Rect) -> Self {
        Self {
            view,
            nodes: Vec::new(),
        }
    }

    /// Returns `true` if the visual contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a top-level mark.
    pub fn push_mark(&mut self, mark: Mark) {
        self.nodes.push(Node::Mark(mark));
    }

    /// Appends top-level marks.
    pub fn extend_marks(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.nodes.extend(marks.into_iter().map(Node::Mark));
    }

    /// Appends a top-level group.
    pub fn push_group(&mut self, group: Group) {
        self.nodes.push(Node::Group(group));
    }

    /// Iterates the top-level groups.
    pub fn groups(&self) -> impl Iterator<Item = &Group> + '_ {
        self.nodes.iter().filter_map(|n| match n {
            Node::Group(g) => Some(g),
            Node::Mark(_) => None,
        })
    }

    /// Iterates every mark in the tree, depth first.
    pub fn marks(&self) -> Marks<'_> {
        Marks::new(&self.nodes)
    }

    /// Looks up a mark by id.
    pub fn mark(&self, id: MarkId) -> Option<&Mark> {
        self.marks().find(|m| m.id == id)
    }

    /// Looks up a group by id, at any depth.
    pub fn group(&self, id: MarkId) -> Option<&Group> {
        fn find(nodes: &[Node], id: MarkId) -> Option<&Group> {
            nodes.iter().find_map(|n| match n {
                Node::Group(g) if g.id == id => Some(g),
                Node::Group(g) => find(&g.children, id),
                Node::Mark(_) => None,
            })
        }
        find(&self.nodes, id)
    }

    /// Returns this visual with every entrance delay reset to zero.
    ///
    /// Two renders with identical parameters compare equal after this.
    pub fn without_timing(mut self) -> Self {
        fn clear(nodes: &mut [Node]) {
            for n in nodes {
                match n {
                    Node::Mark(m) => m.enter_delay = Duration::ZERO,
                    Node::Group(g) => clear(&mut g.children),
                }
            }
        }
        clear(&mut self.nodes);
        self
    }
}

/// Depth-first iterator over the marks of a node list.
#[derive(Clone, Debug)]
pub struct Marks<'a> {
    stack: Vec<slice::Iter<'a, Node>>,
}

impl<'a> Marks<'a> {
    fn new(nodes: &'a [Node]) -> Self {
        let mut stack = Vec::new();
        stack.push(nodes.iter());
        Self { stack }
    }
}

impl<'a> Iterator for Marks<'a> {
    type Item = &'a Mark;

    fn next(&mut self) -> Option<&'a Mark> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(Node::Mark(m)) => return Some(m),
                Some(Node::Group(g)) => self.stack.push(g.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn rect_mark(id: u64, delay_ms: u64) -> Mark {
        Mark::builder(MarkId::from_raw(id))
            .w(1.0)
            .h(1.0)
            .enter_delay(Duration::from_millis(delay_ms))
            .build()
    }

    #[test]
    fn marks_walks_groups_depth_first_in_paint_order() {
        let mut inner = Group::new(MarkId::from_raw(100), Rect::ZERO);
        inner.push_mark(rect_mark(2, 0));
        inner.push_mark(rect_mark(3, 0));

        let mut visual = RenderedVisual::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        visual.push_mark(rect_mark(1, 0));
        visual.push_group(inner);
        visual.push_mark(rect_mark(4, 0));

        let ids: vec::Vec<u64> = visual.marks().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(visual.groups().count(), 1);
        assert!(visual.group(MarkId::from_raw(100)).is_some());
        assert!(visual.mark(MarkId::from_raw(3)).is_some());
        assert!(visual.mark(MarkId::from_raw(9)).is_none());
    }

    #[test]
    fn nested_groups_are_found_but_not_listed_at_top_level() {
        let mut bar = Group::new(MarkId::from_raw(5), Rect::ZERO).with_opacity(0.5);
        bar.push_mark(rect_mark(3, 0));
        let mut row = Group::new(MarkId::from_raw(0), Rect::ZERO);
        row.push_mark(rect_mark(1, 0));
        row.push_group(bar);

        let mut visual = RenderedVisual::empty();
        visual.push_group(row);
        assert_eq!(visual.groups().count(), 1);
        assert_eq!(visual.group(MarkId::from_raw(5)).map(|g| g.opacity), Some(0.5));
        let ids: vec::Vec<u64> = visual.marks().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn without_timing_clears_nested_delays() {
        let mut g = Group::new(MarkId::from_raw(10), Rect::ZERO);
        g.push_mark(rect_mark(1, 30));
        let mut a = RenderedVisual::empty();
        a.push_group(g);
        a.push_mark(rect_mark(2, 40));

        let b = a.clone().without_timing();
        assert_ne!(a, b);
        assert!(b.marks().all(|m| m.enter_delay == Duration::ZERO));
    }

    #[test]
    fn empty_visual_has_no_marks() {
        let v = RenderedVisual::empty();
        assert!(v.is_empty());
        assert_eq!(v.marks().count(), 0);
        assert_eq!(v.view, Rect::ZERO);
    }
}
