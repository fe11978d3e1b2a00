use serde::{Deserialize, Serialize};

use super::transaction::TransactionKind;

/// A named income or expense bucket.
///
/// Categories carry display hints (color, icon) for frontends. Records
/// reference categories by `name` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: String,

    /// Display name and grouping key (exact string match, no folding)
    pub name: String,

    /// Whether this bucket collects income or expense records
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Hex color for chart/legend rendering (e.g. "#10B981")
    pub color: String,

    /// Short display glyph (emoji)
    pub icon: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: TransactionKind,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            color: color.into(),
            icon: icon.into(),
        }
    }
}

/// The fixed default category seed: 6 income and 10 expense buckets.
///
/// New books start from this list; stores that already hold a category
/// list keep whatever they have.
pub fn default_categories() -> Vec<Category> {
    use TransactionKind::{Expense, Income};

    vec![
        // Income buckets
        Category::new("1", "工资薪酬", Income, "#10B981", "💼"),
        Category::new("2", "奖金提成", Income, "#059669", "🎯"),
        Category::new("3", "兼职收入", Income, "#34D399", "💻"),
        Category::new("4", "投资分红", Income, "#6EE7B7", "📈"),
        Category::new("5", "租金收入", Income, "#A7F3D0", "🏠"),
        Category::new("6", "其他收入", Income, "#D1FAE5", "💰"),
        // Expense buckets
        Category::new("7", "餐饮美食", Expense, "#F59E0B", "🍽️"),
        Category::new("8", "交通出行", Expense, "#EF4444", "🚗"),
        Category::new("9", "购物消费", Expense, "#EC4899", "🛍️"),
        Category::new("10", "娱乐休闲", Expense, "#8B5CF6", "🎮"),
        Category::new("11", "住房租金", Expense, "#06B6D4", "🏡"),
        Category::new("12", "医疗健康", Expense, "#10B981", "🏥"),
        Category::new("13", "教育学习", Expense, "#F97316", "📚"),
        Category::new("14", "生活用品", Expense, "#84CC16", "🧴"),
        Category::new("15", "通讯费用", Expense, "#3B82F6", "📱"),
        Category::new("16", "其他支出", Expense, "#6B7280", "💸"),
    ]
}
