use serde::{Deserialize, Serialize};

use super::repo::Meal;

/// Request body shared by meal creation and update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealBody {
    pub name: String,
    pub description: String,
    pub meal_date: String,
    pub on_diet: bool,
}

#[derive(Debug, Serialize)]
pub struct MealsResponse {
    pub meals: Vec<Meal>,
}

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: Option<Meal>,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: MealMetrics,
}

/// Aggregate counters over a user's meals.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealMetrics {
    pub total_meals: u64,
    pub total_meals_on_diet: u64,
    pub total_meals_not_on_diet: u64,
}

impl MealMetrics {
    /// Single pass over an already user-scoped result set.
    pub fn from_meals(meals: &[Meal]) -> Self {
        let mut metrics = MealMetrics {
            total_meals: 0,
            total_meals_on_diet: 0,
            total_meals_not_on_diet: 0,
        };
        for meal in meals {
            if meal.on_diet {
                metrics.total_meals_on_diet += 1;
            } else {
                metrics.total_meals_not_on_diet += 1;
            }
            metrics.total_meals += 1;
        }
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn meal(on_diet: bool) -> Meal {
        Meal {
            id: Uuid::new_v4(),
            name: "lunch".into(),
            description: "rice and beans".into(),
            meal_date: "2024-01-15T12:00:00".into(),
            on_diet,
            user_id: Uuid::new_v4(),
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn metrics_counts_on_and_off_diet() {
        let meals = vec![meal(true), meal(false), meal(true)];
        assert_eq!(
            MealMetrics::from_meals(&meals),
            MealMetrics {
                total_meals: 3,
                total_meals_on_diet: 2,
                total_meals_not_on_diet: 1,
            }
        );
    }

    #[test]
    fn metrics_on_empty_set_is_all_zero() {
        assert_eq!(
            MealMetrics::from_meals(&[]),
            MealMetrics {
                total_meals: 0,
                total_meals_on_diet: 0,
                total_meals_not_on_diet: 0,
            }
        );
    }

    #[test]
    fn metrics_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(MetricsResponse {
            metrics: MealMetrics::from_meals(&[meal(true)]),
        })
        .unwrap();
        assert_eq!(json["metrics"]["totalMeals"], 1);
        assert_eq!(json["metrics"]["totalMealsOnDiet"], 1);
        assert_eq!(json["metrics"]["totalMealsNotOnDiet"], 0);
    }

    #[test]
    fn meal_body_accepts_camel_case_fields() {
        let body: MealBody = serde_json::from_str(
            r#"{"name":"dinner","description":"salad","mealDate":"2024-01-15T20:00:00","onDiet":true}"#,
        )
        .unwrap();
        assert_eq!(body.name, "dinner");
        assert_eq!(body.meal_date, "2024-01-15T20:00:00");
        assert!(body.on_diet);
    }

    #[test]
    fn meal_body_rejects_wrong_types() {
        let result = serde_json::from_str::<MealBody>(
            r#"{"name":"dinner","description":"salad","mealDate":"2024-01-15","onDiet":"yes"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn meal_body_rejects_missing_fields() {
        let result =
            serde_json::from_str::<MealBody>(r#"{"name":"dinner","description":"salad"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_meal_serializes_as_null() {
        let json = serde_json::to_value(MealResponse { meal: None }).unwrap();
        assert!(json["meal"].is_null());
    }

    #[test]
    fn meal_rows_serialize_with_snake_case_fields() {
        let json = serde_json::to_value(MealsResponse {
            meals: vec![meal(false)],
        })
        .unwrap();
        let row = &json["meals"][0];
        assert_eq!(row["name"], "lunch");
        assert_eq!(row["meal_date"], "2024-01-15T12:00:00");
        assert_eq!(row["on_diet"], false);
        assert!(row.get("user_id").is_some());
    }
}
