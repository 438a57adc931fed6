use crate::huffman_coding::dictionary::Dictionary;
use crate::huffman_coding::node::Node;

/// Format bytes as bits, most significant first, with a space between nibbles and two between
/// bytes.
pub fn format_bits(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{:04b} {:04b}", byte >> 4, byte & 0x0f))
        .collect::<Vec<_>>()
        .join("  ")
}

/// One row per symbol: symbol, frequency and code, shortest codes first.
pub fn code_table(dict: &Dictionary) -> String {
    let mut out = format!("{:>8}  {:>10}  code\n", "symbol", "frequency");
    for (symbol, entry) in dict.iter() {
        let symbol = format!("{:?}", symbol);
        out.push_str(&format!("{:>8}  {:>10}  {}\n", symbol, entry.frequency, entry));
    }
    out
}

/// Indented drawing of the tree. Internal nodes show their weight, leaves their symbol and weight.
pub fn render_tree(root: &Node) -> String {
    let mut out = String::new();
    render_node(root, 0, "root", &mut out);
    out
}

fn render_node(node: &Node, depth: usize, label: &str, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Internal {
            frequency,
            left,
            right,
        } => {
            out.push_str(&format!("{}{}: ({})\n", indent, label, frequency));
            render_node(left, depth + 1, "0", out);
            render_node(right, depth + 1, "1", out);
        }
        Node::Leaf {
            frequency,
            symbol: Some(symbol),
        } => {
            out.push_str(&format!("{}{}: {:?} ({})\n", indent, label, symbol, frequency));
        }
        Node::Leaf {
            frequency,
            symbol: None,
        } => {
            out.push_str(&format!("{}{}: unused ({})\n", indent, label, frequency));
        }
    }
}

/// How many times smaller the encoded message is than the same message in a fixed width code
/// just wide enough for the alphabet. Returns None when nothing would be encoded.
pub fn compression_ratio(dict: &Dictionary, message: &str) -> Option<f64> {
    let encoded_bits = dict.byte_count_of(message).ok()? * 8;
    if encoded_bits == 0 {
        return None;
    }
    let fixed_width = (dict.len() as f64).log2().ceil().max(1.0);
    let fixed_bits = fixed_width * message.chars().count() as f64;
    Some(fixed_bits / encoded_bits as f64)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format_bits_test() {
        assert_eq!(format_bits(&[0x15, 0x80]), "0001 0101  1000 0000");
        assert_eq!(format_bits(&[]), "");
    }

    #[test]
    fn code_table_test() {
        let dict = Dictionary::from_counts([('a', 3), ('b', 2), ('c', 1)]).unwrap();
        let table = code_table(&dict);
        let rows = table.lines().collect::<Vec<_>>();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], "     'a'           3  0");
        assert_eq!(rows[3], "     'c'           1  11");
    }

    #[test]
    fn render_tree_test() {
        let dict = Dictionary::from_counts([('a', 3), ('b', 2), ('c', 1)]).unwrap();
        let drawing = render_tree(dict.root().unwrap());
        let expected = "root: (6)\n  0: 'a' (3)\n  1: (3)\n    0: 'b' (2)\n    1: 'c' (1)\n";
        assert_eq!(drawing, expected);
    }

    #[test]
    fn render_padded_tree_test() {
        let dict = Dictionary::from_message("xx").unwrap();
        let drawing = render_tree(dict.root().unwrap());
        assert_eq!(drawing, "root: (2)\n  0: 'x' (2)\n  1: unused (2)\n");
    }

    #[test]
    fn compression_ratio_test() {
        let dict = Dictionary::from_message("aaabbc").unwrap();
        // 2 bit fixed width * 6 symbols over 16 encoded bits
        assert_eq!(compression_ratio(&dict, "aaabbc"), Some(0.75));
        assert_eq!(compression_ratio(&dict, ""), None);
        assert_eq!(compression_ratio(&dict, "q"), None);
    }
}
