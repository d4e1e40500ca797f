use std::fmt::{Debug, Write};

use crate::node::Node;

/// Render the subtree rooted at `n` in graphviz dot format, drawing red links
/// in red.
pub(crate) fn print_dot<T>(n: &Node<T>) -> String
where
    T: Debug,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(
        buf,
        r#"node [shape = circle; style = filled; fontcolor = white; fillcolor = black;];"#
    )
    .unwrap();
    recurse(n, &mut buf);
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<T, W>(n: &Node<T>, buf: &mut W)
where
    W: std::fmt::Write,
    T: Debug,
{
    // Nodes are keyed by address, as values may repeat.
    let id = n as *const Node<T> as usize;

    writeln!(buf, r#""{id}" [label="{:?}"];"#, n.value()).unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                let color = if v.is_red() { "red" } else { "black" };
                writeln!(
                    buf,
                    "\"{id}\" -> \"{}\" [color = \"{color}\";];",
                    v as *const Node<T> as usize
                )
                .unwrap();
                recurse(v, buf);
            }
            None => {
                writeln!(buf, "\"null_{id}\" [shape=point,style=invis];").unwrap();
                writeln!(buf, "\"{id}\" -> \"null_{id}\" [style=invis];").unwrap();
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{insert, InsertMode};

    #[test]
    fn test_print_dot() {
        let mut root = None;
        for v in [2, 1] {
            insert(&mut root, v, InsertMode::Replace);
        }
        let root = root.unwrap();

        let got = print_dot(&root);

        assert!(got.starts_with("digraph {"));
        assert!(got.trim_end().ends_with('}'));
        assert!(got.contains(r#"[label="2"]"#));
        assert!(got.contains(r#"[label="1"]"#));

        // The single child hangs off a red link.
        assert_eq!(got.matches("color = \"red\"").count(), 1);
    }
}
