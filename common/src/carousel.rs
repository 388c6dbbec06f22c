//! 参照画像カルーセル
//!
//! (カテゴリ, 選択値) ごとに表示中の画像インデックスを保持する。
//! 状態は値として受け渡し、遷移関数は新しい状態を返す。
//! 画像リストの長さが変わった場合は、読み出し時に新しい長さで剰余を取る。

use crate::catalog::AttributeCategory;
use std::collections::HashMap;

/// カルーセルのキー（選択値は表示値のまま）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CarouselKey {
    pub category: AttributeCategory,
    pub selection: String,
}

impl CarouselKey {
    pub fn new(category: AttributeCategory, selection: impl Into<String>) -> Self {
        Self {
            category,
            selection: selection.into(),
        }
    }
}

/// 前後移動
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Prev,
    Next,
}

impl std::str::FromStr for Navigation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prev" | "p" | "<" => Ok(Navigation::Prev),
            "next" | "n" | ">" => Ok(Navigation::Next),
            _ => Err(format!("Unknown navigation: {}. Use prev or next", s)),
        }
    }
}

/// 1ステップの遷移（0枚なら常に0）
fn step(index: usize, len: usize, navigation: Navigation) -> usize {
    if len == 0 {
        return 0;
    }
    let index = index % len;
    match navigation {
        Navigation::Next => (index + 1) % len,
        Navigation::Prev => (index + len - 1) % len,
    }
}

/// セッション中のカルーセル状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselState {
    positions: HashMap<CarouselKey, usize>,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初めて見るキーをインデックス0で登録する（既存の位置は変えない）
    pub fn observe(mut self, key: &CarouselKey) -> Self {
        self.positions.entry(key.clone()).or_insert(0);
        self
    }

    /// 現在のインデックス（画像が0枚なら None）
    pub fn index(&self, key: &CarouselKey, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.positions.get(key).copied().unwrap_or(0) % len)
    }

    /// 前後に移動した新しい状態を返す
    pub fn navigate(mut self, key: &CarouselKey, len: usize, navigation: Navigation) -> Self {
        let Some(current) = self.index(key, len) else {
            return self;
        };
        self.positions.insert(key.clone(), step(current, len, navigation));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(selection: &str) -> CarouselKey {
        CarouselKey::new(AttributeCategory::Color, selection)
    }

    #[test]
    fn test_initial_index_is_zero() {
        let state = CarouselState::new().observe(&key("negro"));
        assert_eq!(state.index(&key("negro"), 4), Some(0));
        assert_eq!(state, CarouselState::new().observe(&key("negro")).observe(&key("negro")));
    }

    #[test]
    fn test_empty_list_has_no_index() {
        let state = CarouselState::new().observe(&key("negro"));
        assert_eq!(state.index(&key("negro"), 0), None);

        let after = state.clone().navigate(&key("negro"), 0, Navigation::Next);
        assert_eq!(after, state);
    }

    #[test]
    fn test_prev_from_zero_wraps_to_last() {
        let state = CarouselState::new().navigate(&key("gris"), 5, Navigation::Prev);
        assert_eq!(state.index(&key("gris"), 5), Some(4));
    }

    #[test]
    fn test_n_nexts_return_to_start() {
        for len in 1..=6 {
            let mut state = CarouselState::new().observe(&key("blanco"));
            for _ in 0..len {
                state = state.navigate(&key("blanco"), len, Navigation::Next);
            }
            assert_eq!(state.index(&key("blanco"), len), Some(0), "len={}", len);
        }
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let moves = [
            Navigation::Next,
            Navigation::Prev,
            Navigation::Prev,
            Navigation::Next,
            Navigation::Next,
            Navigation::Next,
            Navigation::Prev,
        ];
        for len in 1..=4 {
            let mut state = CarouselState::new();
            for navigation in moves.iter().cycle().take(50) {
                state = state.navigate(&key("amarillo"), len, *navigation);
                let index = state.index(&key("amarillo"), len).unwrap();
                assert!(index < len);
            }
        }
    }

    #[test]
    fn test_keys_are_independent() {
        let a = key("negro");
        let b = CarouselKey::new(AttributeCategory::Texture, "negro");

        let state = CarouselState::new()
            .observe(&a)
            .navigate(&a, 3, Navigation::Next)
            .navigate(&b, 3, Navigation::Prev)
            .navigate(&b, 3, Navigation::Prev);

        assert_eq!(state.index(&a, 3), Some(1));
        assert_eq!(state.index(&b, 3), Some(1));
        assert_eq!(state.index(&key("gris"), 3), Some(0));
    }

    #[test]
    fn test_switching_back_restores_position() {
        let state = CarouselState::new()
            .observe(&key("negro"))
            .navigate(&key("negro"), 4, Navigation::Next)
            .navigate(&key("negro"), 4, Navigation::Next)
            .observe(&key("gris"))
            .observe(&key("negro"));

        assert_eq!(state.index(&key("negro"), 4), Some(2));
        assert_eq!(state.index(&key("gris"), 4), Some(0));
    }

    #[test]
    fn test_shrunk_list_takes_modulo() {
        let state = CarouselState::new()
            .navigate(&key("rojo-intenso"), 5, Navigation::Prev);
        assert_eq!(state.index(&key("rojo-intenso"), 5), Some(4));
        assert_eq!(state.index(&key("rojo-intenso"), 3), Some(1));

        let state = state.navigate(&key("rojo-intenso"), 3, Navigation::Next);
        assert_eq!(state.index(&key("rojo-intenso"), 3), Some(2));
    }

    #[test]
    fn test_step() {
        assert_eq!(step(0, 1, Navigation::Next), 0);
        assert_eq!(step(0, 1, Navigation::Prev), 0);
        assert_eq!(step(2, 3, Navigation::Next), 0);
        assert_eq!(step(7, 3, Navigation::Prev), 0);
    }

    #[test]
    fn test_step_on_empty_list_stays_at_zero() {
        assert_eq!(step(0, 0, Navigation::Next), 0);
        assert_eq!(step(3, 0, Navigation::Prev), 0);
    }

    #[test]
    fn test_navigation_from_str() {
        assert_eq!("next".parse::<Navigation>(), Ok(Navigation::Next));
        assert_eq!("P".parse::<Navigation>(), Ok(Navigation::Prev));
        assert!("up".parse::<Navigation>().is_err());
    }
}
