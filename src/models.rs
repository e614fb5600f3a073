use serde::{Deserialize, Serialize};

/// Expense category. The backend stores a free-form string; anything outside
/// the known set collapses to `General` on the way in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    General,
    Food,
    Transport,
    Utilities,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Food" => Category::Food,
            "Transport" => Category::Transport,
            "Utilities" => Category::Utilities,
            "Entertainment" => Category::Entertainment,
            _ => Category::General,
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub category: Category,
    #[serde(default)]
    pub date: String,
    pub budget_id: i64,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub name: String,
    pub limit: f64,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

/// Body for creating or updating a budget.
#[derive(Clone, PartialEq, Serialize)]
pub struct BudgetPayload {
    pub name: String,
    pub limit: f64,
}

/// Body for creating or updating an expense.
#[derive(Clone, PartialEq, Serialize)]
pub struct ExpensePayload {
    pub description: String,
    pub amount: f64,
    pub category: Category,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Login response; the auth service also sends `token_type`, which we do not
/// need.
#[derive(Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_falls_back_to_general() {
        assert_eq!(Category::from("Food".to_string()), Category::Food);
        assert_eq!(Category::from("Groceries".to_string()), Category::General);
        assert_eq!(Category::from(String::new()), Category::General);
    }

    #[test]
    fn category_round_trips_as_its_display_string() {
        for cat in Category::ALL {
            assert_eq!(Category::from(String::from(cat)), cat);
        }
    }

    #[test]
    fn decodes_budget_with_nested_expenses() {
        let json = r#"{
            "id": 3,
            "name": "Groceries",
            "limit": 200.0,
            "user_id": "alice",
            "expenses": [
                {"id": 1, "description": "Milk", "amount": 50.0,
                 "category": "Food", "date": "2024-05-01T10:00:00", "budget_id": 3},
                {"id": 2, "description": "Bus pass", "amount": 60.0,
                 "category": "Commute", "date": "2024-05-02T09:30:00", "budget_id": 3}
            ]
        }"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.name, "Groceries");
        assert_eq!(budget.expenses.len(), 2);
        assert_eq!(budget.expenses[0].category, Category::Food);
        // "Commute" is not an offered category
        assert_eq!(budget.expenses[1].category, Category::General);
        assert_eq!(budget.expenses[1].budget_id, 3);
    }

    #[test]
    fn decodes_budget_without_expense_list() {
        let budget: Budget =
            serde_json::from_str(r#"{"id": 1, "name": "Rent", "limit": 900}"#).unwrap();
        assert!(budget.expenses.is_empty());
        assert_eq!(budget.limit, 900.0);
    }

    #[test]
    fn expense_payload_serializes_category_as_string() {
        let payload = ExpensePayload {
            description: "Dinner".to_string(),
            amount: 42.5,
            category: Category::Entertainment,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["category"], "Entertainment");
        assert_eq!(json["amount"], 42.5);
    }
}
