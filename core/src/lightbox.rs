/// Lightbox viewer state. The index is only meaningful while open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// What a key press does while the lightbox is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Step(Direction),
    FocusNext,
    FocusPrev,
}

pub fn key_action(key: &str, shift: bool) -> Option<LightboxKey> {
    match key {
        "Escape" | "Esc" => Some(LightboxKey::Close),
        "ArrowLeft" | "Left" => Some(LightboxKey::Step(Direction::Prev)),
        "ArrowRight" | "Right" => Some(LightboxKey::Step(Direction::Next)),
        "Tab" if shift => Some(LightboxKey::FocusPrev),
        "Tab" => Some(LightboxKey::FocusNext),
        _ => None,
    }
}

/// `(index + delta) mod len`, wrapping in both directions.
pub fn wrap_index(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len_i = len as isize;
    let index = (index % len) as isize;
    (index + delta % len_i + len_i).rem_euclid(len_i) as usize
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Lightbox::Open { index } => Some(*index),
            Lightbox::Closed => None,
        }
    }

    /// Returns `false` (leaving the state alone) for an index outside the list.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        *self = Lightbox::Open { index };
        true
    }

    /// New index after stepping, `None` when closed or the list is empty.
    pub fn step(&mut self, direction: Direction, len: usize) -> Option<usize> {
        let Lightbox::Open { index } = *self else {
            return None;
        };
        if len == 0 {
            *self = Lightbox::Closed;
            return None;
        }
        let next = wrap_index(index, direction.delta(), len);
        *self = Lightbox::Open { index: next };
        Some(next)
    }

    /// Returns whether a transition happened.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Lightbox::Closed;
        was_open
    }
}
