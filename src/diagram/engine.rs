//! Diagram engines turn a diagram description into terminal output.
//!
//! [`TextDiagramEngine`] understands the flowchart and sequence-diagram
//! statements used by the presentation and lays them out as styled text
//! lines, one statement per line.

use std::collections::HashMap;

use thiserror::Error;

/// Failure to turn a diagram description into output
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("diagram text is empty")]
    Empty,

    #[error("unsupported diagram type: {header}")]
    UnsupportedDiagram { header: String },

    #[error("syntax error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("render task failed: {0}")]
    Task(String),
}

impl DiagramError {
    fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Options applied once when an engine is initialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramOptions {
    /// Theme name; only "base" and "plain" change output
    pub theme: String,
    /// Restrict glyphs to ASCII
    pub ascii: bool,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            theme: "base".to_string(),
            ascii: false,
        }
    }
}

/// RGB colour parsed from a `#rrggbb` style value
pub type Rgb = (u8, u8, u8);

/// Role of a run of text in a rendered diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Node,
    Connector,
    EdgeLabel,
    Participant,
    Message,
    Block,
    Note,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
    /// Explicit stroke colour from a `style` directive
    pub stroke: Option<Rgb>,
}

impl Segment {
    fn new(text: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            text: text.into(),
            kind,
            stroke: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagramLine {
    pub indent: usize,
    pub segments: Vec<Segment>,
}

impl DiagramLine {
    #[cfg(test)]
    pub fn plain(&self) -> String {
        let mut out = " ".repeat(self.indent * 2);
        for segment in &self.segments {
            out.push_str(&segment.text);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    Flowchart,
    Sequence,
}

/// Output of a successful render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram {
    pub id: String,
    pub kind: DiagramKind,
    pub lines: Vec<DiagramLine>,
}

impl RenderedDiagram {
    #[cfg(test)]
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(DiagramLine::plain).collect()
    }
}

/// Capability to render a diagram description
pub trait DiagramEngine: Send + Sync {
    fn initialize(&mut self, options: &DiagramOptions);

    fn render(&self, id: &str, text: &str) -> Result<RenderedDiagram, DiagramError>;
}

/// Built-in engine for the flowchart and sequence-diagram subset
#[derive(Debug, Clone, Default)]
pub struct TextDiagramEngine {
    options: DiagramOptions,
}

impl TextDiagramEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn glyphs(&self) -> Glyphs {
        if self.options.ascii {
            Glyphs::ASCII
        } else {
            Glyphs::UNICODE
        }
    }
}

impl DiagramEngine for TextDiagramEngine {
    fn initialize(&mut self, options: &DiagramOptions) {
        self.options = options.clone();
    }

    fn render(&self, id: &str, text: &str) -> Result<RenderedDiagram, DiagramError> {
        let mut statements = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with("%%"));

        let (_, header) = statements.next().ok_or(DiagramError::Empty)?;
        let keyword = header.split_whitespace().next().unwrap_or_default();

        let (kind, lines) = match keyword {
            "graph" | "flowchart" => (
                DiagramKind::Flowchart,
                render_flowchart(header, statements, self.glyphs())?,
            ),
            "sequenceDiagram" => (
                DiagramKind::Sequence,
                render_sequence(statements, self.glyphs())?,
            ),
            _ => {
                return Err(DiagramError::UnsupportedDiagram {
                    header: header.to_string(),
                });
            }
        };

        let lines = if self.options.theme == "plain" {
            lines
                .into_iter()
                .map(|mut line| {
                    for segment in &mut line.segments {
                        segment.stroke = None;
                    }
                    line
                })
                .collect()
        } else {
            lines
        };

        Ok(RenderedDiagram {
            id: id.to_string(),
            kind,
            lines,
        })
    }
}

struct Glyphs {
    arrow: &'static str,
    self_arrow: &'static str,
    block_open: &'static str,
    block_mid: &'static str,
    block_close: &'static str,
    note: &'static str,
    bullet: &'static str,
}

impl Glyphs {
    const UNICODE: Glyphs = Glyphs {
        arrow: "──▶",
        self_arrow: "↺",
        block_open: "┌ ",
        block_mid: "├ ",
        block_close: "└",
        note: "※ ",
        bullet: " · ",
    };

    const ASCII: Glyphs = Glyphs {
        arrow: "-->",
        self_arrow: "<>",
        block_open: "+ ",
        block_mid: "| ",
        block_close: "+",
        note: "* ",
        bullet: ", ",
    };
}

// ============================================================================
// Flowchart
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeShape {
    Rect,
    Round,
    Diamond,
}

#[derive(Debug, Clone)]
struct Node {
    label: Option<String>,
    shape: NodeShape,
    stroke: Option<Rgb>,
}

struct Edge {
    from: String,
    to: String,
    label: Option<String>,
}

fn render_flowchart<'a>(
    header: &str,
    statements: impl Iterator<Item = (usize, &'a str)>,
    glyphs: Glyphs,
) -> Result<Vec<DiagramLine>, DiagramError> {
    let direction = header.split_whitespace().nth(1).unwrap_or("TD");
    if !matches!(direction, "TD" | "TB" | "BT" | "LR" | "RL") {
        return Err(DiagramError::parse(1, format!("unknown direction '{}'", direction)));
    }

    let mut nodes: HashMap<String, Node> = HashMap::new();
    let mut edges: Vec<Edge> = Vec::new();

    for (line_no, statement) in statements {
        if let Some(rest) = statement.strip_prefix("style ") {
            let mut parts = rest.splitn(2, char::is_whitespace);
            let node_id = parts.next().unwrap_or_default();
            let props = parts.next().unwrap_or_default();
            let stroke = style_color(props, "stroke");
            nodes
                .entry(node_id.to_string())
                .or_insert_with(|| Node {
                    label: None,
                    shape: NodeShape::Rect,
                    stroke: None,
                })
                .stroke = stroke;
            continue;
        }
        if statement.starts_with("classDef ") || statement.starts_with("linkStyle ") {
            continue;
        }

        let mut parts = statement.split("-->");
        let first = parts.next().unwrap_or_default();
        let mut previous = declare_node(&mut nodes, first, line_no)?;

        for part in parts {
            let part = part.trim();
            let (label, target) = match part.strip_prefix('|') {
                Some(rest) => {
                    let end = rest
                        .find('|')
                        .ok_or_else(|| DiagramError::parse(line_no, "unclosed edge label"))?;
                    (Some(rest[..end].trim().to_string()), &rest[end + 1..])
                }
                None => (None, part),
            };
            let target = declare_node(&mut nodes, target, line_no)?;
            edges.push(Edge {
                from: previous,
                to: target.clone(),
                label,
            });
            previous = target;
        }
    }

    let node_segment = |id: &str| -> Segment {
        let (text, stroke) = match nodes.get(id) {
            Some(node) => {
                let label = node.label.as_deref().unwrap_or(id);
                let text = match node.shape {
                    NodeShape::Rect => format!("[{}]", label),
                    NodeShape::Round => format!("({})", label),
                    NodeShape::Diamond => format!("{{{}}}", label),
                };
                (text, node.stroke)
            }
            None => (format!("[{}]", id), None),
        };
        Segment {
            text,
            kind: SegmentKind::Node,
            stroke,
        }
    };

    let lines = edges
        .iter()
        .map(|edge| {
            let mut segments = vec![node_segment(&edge.from), Segment::new(" ", SegmentKind::Text)];
            if let Some(label) = &edge.label {
                segments.push(Segment::new(label.clone(), SegmentKind::EdgeLabel));
                segments.push(Segment::new(" ", SegmentKind::Text));
            }
            segments.push(Segment::new(glyphs.arrow, SegmentKind::Connector));
            segments.push(Segment::new(" ", SegmentKind::Text));
            segments.push(node_segment(&edge.to));
            DiagramLine {
                indent: 0,
                segments,
            }
        })
        .collect();

    Ok(lines)
}

/// Parse `ID`, `ID[label]`, `ID(label)` or `ID{label}` and record the node
fn declare_node(
    nodes: &mut HashMap<String, Node>,
    text: &str,
    line_no: usize,
) -> Result<String, DiagramError> {
    let text = text.trim();
    let split = text
        .find(|c: char| c == '[' || c == '(' || c == '{')
        .unwrap_or(text.len());
    let (id, shape_text) = text.split_at(split);
    let id = id.trim();

    if id.is_empty() || !id.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(DiagramError::parse(line_no, format!("invalid node '{}'", text)));
    }

    let node = nodes.entry(id.to_string()).or_insert_with(|| Node {
        label: None,
        shape: NodeShape::Rect,
        stroke: None,
    });

    if !shape_text.is_empty() {
        let (shape, close) = match shape_text.chars().next() {
            Some('(') => (NodeShape::Round, ')'),
            Some('{') => (NodeShape::Diamond, '}'),
            _ => (NodeShape::Rect, ']'),
        };
        let inner = shape_text[1..]
            .strip_suffix(close)
            .ok_or_else(|| DiagramError::parse(line_no, format!("unclosed node '{}'", text)))?;
        node.label = Some(inner.trim().to_string());
        node.shape = shape;
    }

    Ok(id.to_string())
}

/// Extract a `#rrggbb` value for `key` from a `k:v,k:v` style list
fn style_color(props: &str, key: &str) -> Option<Rgb> {
    props.split(',').find_map(|prop| {
        let (k, v) = prop.split_once(':')?;
        if k.trim() != key {
            return None;
        }
        parse_hex(v.trim())
    })
}

fn parse_hex(value: &str) -> Option<Rgb> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

// ============================================================================
// Sequence diagram
// ============================================================================

const MESSAGE_ARROWS: [&str; 4] = ["-->>", "->>", "-->", "->"];

fn render_sequence<'a>(
    statements: impl Iterator<Item = (usize, &'a str)>,
    glyphs: Glyphs,
) -> Result<Vec<DiagramLine>, DiagramError> {
    let mut order: Vec<String> = Vec::new();
    let mut names: HashMap<String, String> = HashMap::new();
    let mut body: Vec<DiagramLine> = Vec::new();
    let mut depth = 0usize;
    let mut last_line = 0usize;

    for (line_no, statement) in statements {
        last_line = line_no;
        let keyword = statement.split_whitespace().next().unwrap_or_default();

        match keyword {
            "participant" | "actor" => {
                let rest = statement[keyword.len()..].trim();
                let (id, alias) = match rest.split_once(" as ") {
                    Some((id, alias)) => (id.trim(), alias.trim()),
                    None => (rest, rest),
                };
                if id.is_empty() {
                    return Err(DiagramError::parse(line_no, "participant needs a name"));
                }
                if !names.contains_key(id) {
                    order.push(id.to_string());
                }
                names.insert(id.to_string(), alias.to_string());
            }
            "autonumber" => {}
            "alt" | "opt" | "loop" | "par" | "critical" | "rect" => {
                let label = statement[keyword.len()..].trim();
                let text = if keyword == "rect" {
                    "highlight".to_string()
                } else if label.is_empty() {
                    keyword.to_string()
                } else {
                    format!("{} {}", keyword, label)
                };
                body.push(DiagramLine {
                    indent: depth,
                    segments: vec![Segment::new(
                        format!("{}{}", glyphs.block_open, text),
                        SegmentKind::Block,
                    )],
                });
                depth += 1;
            }
            "else" | "and" | "option" => {
                if depth == 0 {
                    return Err(DiagramError::parse(
                        line_no,
                        format!("'{}' outside of a block", keyword),
                    ));
                }
                let label = statement[keyword.len()..].trim();
                body.push(DiagramLine {
                    indent: depth - 1,
                    segments: vec![Segment::new(
                        format!("{}{} {}", glyphs.block_mid, keyword, label).trim_end().to_string(),
                        SegmentKind::Block,
                    )],
                });
            }
            "end" => {
                if depth == 0 {
                    return Err(DiagramError::parse(line_no, "'end' without an open block"));
                }
                depth -= 1;
                body.push(DiagramLine {
                    indent: depth,
                    segments: vec![Segment::new(glyphs.block_close, SegmentKind::Block)],
                });
            }
            "Note" | "note" => {
                let (target, text) = statement[keyword.len()..]
                    .split_once(':')
                    .ok_or_else(|| DiagramError::parse(line_no, "note needs ':' and text"))?;
                let target = target.trim();
                let placement = ["over", "left of", "right of"]
                    .iter()
                    .find(|p| target.starts_with(*p))
                    .ok_or_else(|| {
                        DiagramError::parse(line_no, format!("unknown note placement '{}'", target))
                    })?;
                let actors: Vec<String> = target[placement.len()..]
                    .split(',')
                    .map(|a| a.trim())
                    .filter(|a| !a.is_empty())
                    .map(|a| {
                        ensure_participant(a, &mut order, &mut names);
                        names.get(a).cloned().unwrap_or_else(|| a.to_string())
                    })
                    .collect();
                body.push(DiagramLine {
                    indent: depth,
                    segments: vec![
                        Segment::new(
                            format!("{}Note {} {}: ", glyphs.note, placement, actors.join(", ")),
                            SegmentKind::Note,
                        ),
                        Segment::new(text.trim(), SegmentKind::Text),
                    ],
                });
            }
            _ => {
                let (arrow_pos, arrow) = MESSAGE_ARROWS
                    .iter()
                    .filter_map(|a| statement.find(a).map(|pos| (pos, *a)))
                    .min_by_key(|(pos, a)| (*pos, std::cmp::Reverse(a.len())))
                    .ok_or_else(|| {
                        DiagramError::parse(
                            line_no,
                            format!("unrecognised statement '{}'", statement),
                        )
                    })?;
                let from = statement[..arrow_pos].trim();
                let (to, text) = statement[arrow_pos + arrow.len()..]
                    .split_once(':')
                    .ok_or_else(|| DiagramError::parse(line_no, "message needs ':' and text"))?;
                let to = to.trim();
                if from.is_empty() || to.is_empty() {
                    return Err(DiagramError::parse(line_no, "message needs a sender and receiver"));
                }
                ensure_participant(from, &mut order, &mut names);
                ensure_participant(to, &mut order, &mut names);

                let from_name = names.get(from).cloned().unwrap_or_default();
                let to_name = names.get(to).cloned().unwrap_or_default();
                let mut segments = vec![Segment::new(from_name, SegmentKind::Participant)];
                if from == to {
                    segments.push(Segment::new(
                        format!(" {} ", glyphs.self_arrow),
                        SegmentKind::Connector,
                    ));
                } else {
                    segments.push(Segment::new(
                        format!(" {} ", glyphs.arrow),
                        SegmentKind::Connector,
                    ));
                    segments.push(Segment::new(to_name, SegmentKind::Participant));
                }
                segments.push(Segment::new(": ", SegmentKind::Text));
                segments.push(Segment::new(text.trim(), SegmentKind::Message));
                body.push(DiagramLine {
                    indent: depth,
                    segments,
                });
            }
        }
    }

    if depth != 0 {
        return Err(DiagramError::parse(last_line, "unclosed block"));
    }

    let cast = order
        .iter()
        .filter_map(|id| names.get(id).cloned())
        .collect::<Vec<_>>()
        .join(glyphs.bullet);
    let mut lines = vec![
        DiagramLine {
            indent: 0,
            segments: vec![
                Segment::new("Participants: ", SegmentKind::Text),
                Segment::new(cast, SegmentKind::Participant),
            ],
        },
        DiagramLine::default(),
    ];
    lines.extend(body);
    Ok(lines)
}

/// Register an undeclared participant under its own id
fn ensure_participant(id: &str, order: &mut Vec<String>, names: &mut HashMap<String, String>) {
    if !names.contains_key(id) {
        names.insert(id.to_string(), id.to_string());
        order.push(id.to_string());
    }
}
