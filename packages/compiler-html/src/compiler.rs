use pagecraft_schema::{HeadingTag, Node, NodeType, PageDocument};

/// Escape text for use in HTML content and attribute values.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_children(node: &Node) -> String {
    node.children
        .iter()
        .flatten()
        .map(render_node_html)
        .collect::<Vec<_>>()
        .join("")
}

/// Render one node (and its subtree) to static HTML.
///
/// Pure and side-effect free. Every emitted element carries `node-<id>` as
/// its class so the generated stylesheet binds to it.
pub fn render_node_html(node: &Node) -> String {
    let class = format!("node-{}", node.id);
    match node.node_type {
        NodeType::Header => format!("<header class=\"{class}\">{}</header>", render_children(node)),
        NodeType::Footer => format!("<footer class=\"{class}\">{}</footer>", render_children(node)),
        NodeType::Section | NodeType::Hero => {
            format!("<section class=\"{class}\">{}</section>", render_children(node))
        }
        NodeType::Container | NodeType::Card | NodeType::Columns2 => {
            format!("<div class=\"{class}\">{}</div>", render_children(node))
        }
        NodeType::Heading => {
            let tag = node
                .content
                .as_ref()
                .and_then(|content| content.tag)
                .unwrap_or(HeadingTag::H2)
                .as_str();
            format!(
                "<{tag} class=\"{class}\">{}</{tag}>",
                escape_html(node.content_text())
            )
        }
        NodeType::Text => format!("<p class=\"{class}\">{}</p>", escape_html(node.content_text())),
        NodeType::Image => {
            let content = node.content.as_ref();
            let src = content.and_then(|content| content.src.as_deref()).unwrap_or("");
            let alt = content.and_then(|content| content.alt.as_deref()).unwrap_or("");
            format!(
                "<img class=\"{class}\" src=\"{}\" alt=\"{}\" />",
                escape_html(src),
                escape_html(alt)
            )
        }
        NodeType::Button => {
            let content = node.content.as_ref();
            let href = content.and_then(|content| content.href.as_deref()).unwrap_or("#");
            let target = content
                .and_then(|content| content.target)
                .map_or("_self", |target| target.as_str());
            let label = content
                .and_then(|content| content.text.as_deref())
                .unwrap_or("Button");
            format!(
                "<a class=\"{class}\" href=\"{}\" target=\"{target}\">{}</a>",
                escape_html(href),
                escape_html(label)
            )
        }
        NodeType::List => {
            let items = node
                .content_text()
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| format!("<li>{}</li>", escape_html(line)))
                .collect::<Vec<_>>()
                .join("");
            format!("<ul class=\"{class}\">{items}</ul>")
        }
        NodeType::Divider | NodeType::Spacer | NodeType::Unknown => {
            format!("<div class=\"{class}\"></div>")
        }
    }
}

/// Render the full standalone HTML document: shell, title and stylesheet
/// link around the page tree.
pub fn render_page_html(page: &PageDocument) -> String {
    let body = format!("<div class=\"page-root\">{}</div>", render_node_html(&page.root));
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\" />\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n  <title>{}</title>\n  <link rel=\"stylesheet\" href=\"styles.css\" />\n</head>\n<body>\n{body}\n</body>\n</html>",
        escape_html(&page.name)
    )
}

/// Render the markup fragment used by the component-export variant.
pub fn render_component_html(page: &PageDocument) -> String {
    format!("<div class=\"page-root\">{}</div>", render_node_html(&page.root))
}
