/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

/// Up to five page numbers centered on the current page, clamped to
/// `[1, total]`. Empty when there are no pages at all.
pub fn page_window(current: u32, total: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }

    let span = total.min(5);
    let mut start = current.saturating_sub(2).max(1);
    if start + span - 1 > total {
        start = total - span + 1;
    }

    (start..start + span).collect()
}

/// One-line pagination control, prev/next markers suppressed at the range
/// boundaries:
///
/// `Page 3 of 10   < 1 2 [3] 4 5 >`
pub fn render(current: u32, total: u32) -> String {
    let window = page_window(current, total);
    if window.is_empty() {
        return String::new();
    }

    let mut line = format!("Page {} of {}  ", current, total);

    line.push_str(if current > 1 { " <" } else { "  " });

    for page in window {
        if page == current {
            line.push_str(&format!(" [{}]", page));
        } else {
            line.push_str(&format!(" {}", page));
        }
    }

    if current < total {
        line.push_str(" >");
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_centers_on_current() {
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_clamps_at_boundaries() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_short_ranges() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 4), vec![1, 2, 3, 4]);
        assert_eq!(page_window(1, 0), Vec::<u32>::new());
    }

    #[test]
    fn test_render_markers() {
        let first = render(1, 3);
        assert!(first.contains("[1]"));
        assert!(!first.contains('<'));
        assert!(first.ends_with('>'));

        let last = render(3, 3);
        assert!(last.contains("[3]"));
        assert!(last.contains('<'));
        assert!(!last.ends_with('>'));

        let only = render(1, 1);
        assert!(!only.contains('<'));
        assert!(!only.ends_with('>'));

        assert_eq!(render(1, 0), "");
    }
}
