//! Indented rendering of expression trees.

use super::BorelSet;
use std::fmt::Write;

impl BorelSet {
    /// Renders the tree structure one node per line, children indented below their parent.
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, indent: usize) {
        let prefix = "  ".repeat(indent);
        // Writing to a String cannot fail.
        let _ = match self {
            BorelSet::Universe | BorelSet::Empty | BorelSet::Interval(_) => {
                writeln!(out, "{}└─ {}", prefix, self)
            }
            BorelSet::Complement(_) => writeln!(out, "{}└─ Not", prefix),
            BorelSet::Union(_) => writeln!(out, "{}└─ Union", prefix),
            BorelSet::Intersection(_) => writeln!(out, "{}└─ Intersection", prefix),
        };
        match self {
            BorelSet::Complement(child) => child.render_into(out, indent + 1),
            BorelSet::Union(children) | BorelSet::Intersection(children) => {
                for child in children {
                    child.render_into(out, indent + 1);
                }
            }
            _ => {}
        }
    }

    /// Prints the tree structure to stdout.
    pub fn print_tree(&self) {
        print!("{}", self.render_tree());
    }
}
