//! Catalog display formatting
//!
//! Formats expense types for terminal output.

use crate::models::ExpenseType;
use crate::resolver;

/// Format the catalog as an aligned table
pub fn format_type_table(types: &[&ExpenseType]) -> String {
    if types.is_empty() {
        return "No expense types found.".to_string();
    }

    let name_width = types
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>10}  {:>10}  {:<8}  {:<7}  {}\n",
        "Type",
        "Rate/km",
        "Cap",
        "Receipt",
        "Travel",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->10}  {:->10}  {:-<8}  {:-<7}  {:-<14}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for t in types {
        let rate = t
            .rate_per_km
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        let cap = t
            .max_amount
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:<width$}  {:>10}  {:>10}  {:<8}  {:<7}  {}\n",
            t.name,
            rate,
            cap,
            if t.requires_receipt { "yes" } else { "no" },
            if t.requires_travel { "yes" } else { "no" },
            t.id,
            width = name_width
        ));
    }

    output
}

/// Format one type with the fields its form will show
pub fn format_type_details(expense_type: &ExpenseType) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", expense_type.name));
    output.push_str(&format!("  ID: {}\n", expense_type.id));

    if let Some(rate) = expense_type.rate_per_km {
        output.push_str(&format!("  Rate per km: {}\n", rate));
    }
    if let Some(cap) = expense_type.max_amount {
        output.push_str(&format!("  Maximum amount: {}\n", cap));
    }

    let fields: Vec<String> = resolver::required_fields(expense_type)
        .iter()
        .map(|f| f.to_string())
        .collect();
    output.push_str(&format!("  Form fields: {}\n", fields.join(", ")));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_type_table() {
        let bike = ExpenseType::with_rate("Travel - Bike", Money::from_rupees(5));
        let other = ExpenseType::new("Other");
        let table = format_type_table(&[&bike, &other]);

        assert!(table.contains("Travel - Bike"));
        assert!(table.contains("₹5.00"));
        assert!(table.contains("Other"));
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_type_table(&[]), "No expense types found.");
    }

    #[test]
    fn test_format_type_details() {
        let cab = ExpenseType::new("Travel - Cab")
            .requiring_receipt()
            .requiring_travel()
            .with_cap(Money::from_rupees(1000));
        let details = format_type_details(&cab);

        assert!(details.contains("Travel - Cab"));
        assert!(details.contains("Maximum amount: ₹1000.00"));
        assert!(details.contains("receipt"));
        assert!(details.contains("travel-from"));
    }
}
