//! Dish genres and their recipe-search category ids.

use std::fmt;
use std::str::FromStr;

/// A dish genre the user can narrow a search to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Popular,
    Meat,
    Fish,
    Egg,
    Rice,
    Pasta,
    Noodles,
    Soup,
    Salad,
    Sweets,
}

impl Genre {
    pub const ALL: &'static [Genre] = &[
        Genre::Popular,
        Genre::Meat,
        Genre::Fish,
        Genre::Egg,
        Genre::Rice,
        Genre::Pasta,
        Genre::Noodles,
        Genre::Soup,
        Genre::Salad,
        Genre::Sweets,
    ];

    /// Large-category id understood by the recipe API.
    pub fn category_id(&self) -> &'static str {
        match self {
            Genre::Popular => "30",
            Genre::Meat => "31",
            Genre::Fish => "32",
            Genre::Egg => "33",
            Genre::Rice => "14",
            Genre::Pasta => "15",
            Genre::Noodles => "16",
            Genre::Soup => "17",
            Genre::Salad => "18",
            Genre::Sweets => "21",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Genre::Popular => "popular",
            Genre::Meat => "meat",
            Genre::Fish => "fish",
            Genre::Egg => "egg",
            Genre::Rice => "rice",
            Genre::Pasta => "pasta",
            Genre::Noodles => "noodles",
            Genre::Soup => "soup",
            Genre::Salad => "salad",
            Genre::Sweets => "sweets",
        }
    }

    /// Japanese label shown in the genre picker.
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Popular => "人気メニュー",
            Genre::Meat => "肉料理",
            Genre::Fish => "魚料理",
            Genre::Egg => "卵料理",
            Genre::Rice => "ご飯もの",
            Genre::Pasta => "パスタ",
            Genre::Noodles => "麺・粉物料理",
            Genre::Soup => "汁物・スープ",
            Genre::Salad => "サラダ",
            Genre::Sweets => "お菓子",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Genre {
    type Err = String;

    /// Accepts the English key (any case) or the Japanese label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.key().eq_ignore_ascii_case(s) || g.label() == s)
            .ok_or_else(|| format!("unknown genre: {}", s))
    }
}
