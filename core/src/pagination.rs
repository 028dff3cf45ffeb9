use std::ops::Range;

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_items.div_ceil(page_size).max(1)
}

/// Clamps a requested page into `[1, total_pages]`.
pub fn page_for(requested: usize, total_items: usize, page_size: usize) -> usize {
    requested.clamp(1, total_pages(total_items, page_size))
}

/// Global index range of the items shown on `page` (already clamped).
pub fn page_range(page: usize, total_items: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let page = page_for(page, total_items, page_size);
    let start = ((page - 1) * page_size).min(total_items);
    let end = (start + page_size).min(total_items);
    start..end
}

/// Value of the `page` query parameter. Anything that is not a positive
/// integer counts as page 1. Leading digits are accepted (`"3abc"` is 3) and
/// values past `usize::MAX` saturate.
pub fn parse_page_param(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return 1;
    };
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    if digits.bytes().all(|byte| byte == b'0') {
        return 1;
    }
    // Too many digits for usize; the caller clamps to the last page.
    digits.parse::<usize>().unwrap_or(usize::MAX)
}

/// Query value to write back, `None` meaning the parameter is removed.
pub fn page_param(page: usize) -> Option<String> {
    if page <= 1 {
        None
    } else {
        Some(page.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageItem {
    Prev { target: usize, disabled: bool },
    Page { number: usize, current: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

/// Candidate page numbers: first two, last two and the neighbours of the
/// current page, deduplicated and ascending.
pub fn page_numbers(current: usize, total: usize) -> Vec<usize> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let candidates = [
        Some(1),
        Some(2),
        current.checked_sub(1),
        Some(current),
        Some(current + 1),
        total.checked_sub(1),
        Some(total),
    ];
    let mut numbers: Vec<usize> = candidates
        .into_iter()
        .flatten()
        .filter(|n| (1..=total).contains(n))
        .collect();
    numbers.sort_unstable();
    numbers.dedup();
    numbers
}

/// Full control strip, empty when everything fits on one page.
pub fn page_strip(current: usize, total: usize) -> Vec<PageItem> {
    if total <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let mut items = Vec::new();
    items.push(PageItem::Prev {
        target: current.saturating_sub(1).max(1),
        disabled: current == 1,
    });
    let mut last = None;
    for number in page_numbers(current, total) {
        if let Some(prev) = last {
            if number - prev > 1 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.push(PageItem::Page {
            number,
            current: number == current,
        });
        last = Some(number);
    }
    items.push(PageItem::Next {
        target: (current + 1).min(total),
        disabled: current == total,
    });
    items
}
