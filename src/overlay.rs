//! Data contract for external renderers: which landmark pairs to
//! connect and what the debug panel should say. No pixels are touched
//! here; the window layer decides how to draw.

use crate::classifier::{DebugMetrics, PoseLabel};
use crate::text::{self, Language};

/// Lips-only subset of the face mesh connections. Index pairs into the
/// 468-point mesh: outer contour first, then the inner lip ring.
pub const LIPS_CONNECTIONS: [(usize, usize); 40] = [
    (61, 146),
    (146, 91),
    (91, 181),
    (181, 84),
    (84, 17),
    (17, 314),
    (314, 405),
    (405, 321),
    (321, 375),
    (375, 291),
    (61, 185),
    (185, 40),
    (40, 39),
    (39, 37),
    (37, 0),
    (0, 267),
    (267, 269),
    (269, 270),
    (270, 409),
    (409, 291),
    (78, 95),
    (95, 88),
    (88, 178),
    (178, 87),
    (87, 14),
    (14, 317),
    (317, 402),
    (402, 318),
    (318, 324),
    (324, 308),
    (78, 191),
    (191, 80),
    (80, 81),
    (81, 82),
    (82, 13),
    (13, 312),
    (312, 311),
    (311, 310),
    (310, 415),
    (415, 308),
];

/// Full hand skeleton: thumb, four fingers, palm ring.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (5, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (9, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (13, 17),
    (17, 18),
    (18, 19),
    (19, 20),
    (0, 17),
];

/// Formats the current metrics and label as panel text lines in the
/// requested language. One string per line, top to bottom.
pub fn debug_lines(metrics: &DebugMetrics, label: PoseLabel, language: Language) -> Vec<String> {
    let t = text::debug_text(language);
    let face = if metrics.face_detected { t.yes } else { t.no };

    vec![
        format!("{}: {}", t.hands, metrics.hands_detected),
        format!("{}: {}", t.face, face),
        format!("{}: {:.3}", t.mouth, metrics.mouth_ratio),
        format!("{}: {:.3}", t.hand_height, metrics.hand_height),
        format!("{}: {}", t.pose, text::pose_name(label, language)),
    ]
}
