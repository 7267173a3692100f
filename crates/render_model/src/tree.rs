//! Generic tree renderer
//!
//! Output looks like:
//!
//! ```text
//! ├── src
//! │   ├── lib.rs
//! │   └── tree.rs
//! └── Cargo.toml
//! ```

/// Lists the top-level nodes of a tree and the children of any node
pub trait TreeContentProvider<T> {
    fn roots(&self) -> Vec<T>;

    /// Children of `node`, in display order
    fn children(&self, node: &T) -> Vec<T>;
}

/// Produces the one-line label of a node
pub trait NameProvider<T> {
    fn name(&self, node: &T) -> String;
}

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const BLANK: &str = "    ";

/// Draws a tree with box-drawing prefixes, one line per node
pub struct TreeViewer<'a, T> {
    content: &'a dyn TreeContentProvider<T>,
    names: &'a dyn NameProvider<T>,
}

impl<'a, T> TreeViewer<'a, T> {
    pub fn new(content: &'a dyn TreeContentProvider<T>, names: &'a dyn NameProvider<T>) -> Self {
        Self { content, names }
    }

    /// Render the whole tree. Lines are separated by `\n` with no trailing
    /// newline; an empty tree renders as an empty string.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        let mut has_next_sibling = Vec::new();
        self.visit_all(self.content.roots(), &mut has_next_sibling, &mut lines);
        lines.join("\n")
    }

    fn visit_all(&self, nodes: Vec<T>, has_next_sibling: &mut Vec<bool>, lines: &mut Vec<String>) {
        let count = nodes.len();
        for (index, node) in nodes.into_iter().enumerate() {
            has_next_sibling.push(index + 1 < count);
            lines.push(self.line(&node, has_next_sibling));
            self.visit_all(self.content.children(&node), has_next_sibling, lines);
            has_next_sibling.pop();
        }
    }

    fn line(&self, node: &T, has_next_sibling: &[bool]) -> String {
        let mut line = String::new();
        let last = has_next_sibling.len().saturating_sub(1);
        for (depth, &has_next) in has_next_sibling.iter().enumerate() {
            let glyph = match (depth == last, has_next) {
                (true, true) => BRANCH,
                (true, false) => LAST_BRANCH,
                (false, true) => VERTICAL,
                (false, false) => BLANK,
            };
            line.push_str(glyph);
        }
        line.push_str(&self.names.name(node));
        line
    }
}

/// Render a tree whose provider also names its nodes
pub fn render_tree<T, P>(provider: &P) -> String
where
    P: TreeContentProvider<T> + NameProvider<T>,
{
    TreeViewer::new(provider, provider).render()
}
