use std::cmp::Ordering;

use crate::config::AssetLayout;

/// One gallery entry. `key` is the manifest filename without its extension;
/// every URL is derived from it by naming convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Photo {
    pub key: String,
    pub thumb_webp: String,
    pub thumb_jpg: String,
    pub full_webp: String,
    pub full_jpg: String,
}

impl Photo {
    pub fn from_filename(filename: &str, layout: &AssetLayout) -> Self {
        let key = key_from_filename(filename);
        Self {
            thumb_webp: layout.thumb_url(&key, "webp"),
            thumb_jpg: layout.thumb_url(&key, "jpg"),
            full_webp: layout.full_url(&key, "webp"),
            full_jpg: layout.full_url(&key, "jpg"),
            key,
        }
    }
}

/// Drops any directory prefix and a trailing `.ext` made of ASCII alphanumerics.
pub fn key_from_filename(filename: &str) -> String {
    let file = filename.rsplit('/').next().unwrap_or(filename).trim();
    match file.rfind('.') {
        Some(dot)
            if dot + 1 < file.len()
                && file[dot + 1..].chars().all(|ch| ch.is_ascii_alphanumeric()) =>
        {
            file[..dot].to_string()
        }
        _ => file.to_string(),
    }
}

/// Case-insensitive comparison where runs of ASCII digits compare by value,
/// so `img-10` sorts after `img-9`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let ordering = compare_digit_runs(&l_run, &r_run);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                let ordering = l.to_lowercase().cmp(r.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits<I>(chars: &mut std::iter::Peekable<I>) -> String
where
    I: Iterator<Item = char>,
{
    let mut run = String::new();
    while let Some(ch) = chars.peek().copied() {
        if !ch.is_ascii_digit() {
            break;
        }
        run.push(ch);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Highest-numbered file first.
pub fn sort_manifest(files: &mut [String]) {
    files.sort_by(|a, b| natural_cmp(b, a));
}

pub fn build_photos(mut files: Vec<String>, layout: &AssetLayout) -> Vec<Photo> {
    files.retain(|file| !file.trim().is_empty());
    sort_manifest(&mut files);
    files
        .iter()
        .map(|file| Photo::from_filename(file, layout))
        .collect()
}
