use crate::arena::{Arena, Handle};
use crate::bimap::node::Node;
use crate::splay::{Axis, Linked};

/// Renders the tree of `axis` as a Mermaid `graph TD` description, listing empty children as
/// `nil` leaves.
pub fn mermaid<L, R, F>(
    arena: &Arena<Node<L, R>>,
    axis: Axis,
    root: Option<Handle>,
    label: F,
) -> String
where
    F: Fn(&Node<L, R>) -> String,
{
    let mut out = String::from("graph TD\n");
    let mut next_id = 1;
    let mut stack = vec![(root, 0)];

    while let Some((node, id)) = stack.pop() {
        let node = match node {
            Some(node) => node,
            None => {
                out.push_str(&format!("_{}[nil]\n", id));
                continue;
            },
        };

        let links = arena[node].links(axis);
        let (left_id, right_id) = (next_id, next_id + 1);
        next_id += 2;

        out.push_str(&format!("_{}[{}]\n", id, label(&arena[node])));
        out.push_str(&format!("_{} --> _{}\n", id, left_id));
        out.push_str(&format!("_{} --> _{}\n", id, right_id));
        stack.push((links.right, right_id));
        stack.push((links.left, left_id));
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::BiMap;

    #[test]
    fn test_render_empty() {
        let map: BiMap<u32, u32> = BiMap::new();
        assert_eq!(map.render_left(), "graph TD\n_0[nil]\n");
    }

    #[test]
    fn test_render_counts() {
        let map: BiMap<u32, u32> = (0..8).map(|i| (i, 7 - i)).collect();
        let rendered = map.render_right();
        assert_eq!(rendered.matches("[nil]").count(), 9);
        assert_eq!(rendered.matches(" --> ").count(), 16);
        for i in 0..8 {
            assert!(rendered.contains(&format!("[{}]", i)));
        }
    }
}
