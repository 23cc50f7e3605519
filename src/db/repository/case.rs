use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::Case;
use crate::triage::TriageResult;

/// Insert a triage case. Symptoms and the full result are stored as JSON;
/// priority and score are denormalised for querying without decoding.
pub fn insert_case(conn: &Connection, case: &Case) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO cases (id, name, age, contact, description, severity, symptoms,
         priority, score, result, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            case.id.to_string(),
            case.name,
            case.age,
            case.contact,
            case.description,
            case.severity,
            encode_json(&case.symptoms)?,
            case.result.priority.as_str(),
            case.result.score,
            encode_json(&case.result)?,
            case.created_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn get_case(conn: &Connection, id: &Uuid) -> Result<Option<Case>, DatabaseError> {
    let result = conn.query_row(
        "SELECT id, name, age, contact, description, severity, symptoms, result, created_at
         FROM cases WHERE id = ?1",
        params![id.to_string()],
        row_to_tuple,
    );

    match result {
        Ok(row) => Ok(Some(case_from_row(row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All cases, newest first.
pub fn list_cases(conn: &Connection) -> Result<Vec<Case>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, age, contact, description, severity, symptoms, result, created_at
         FROM cases ORDER BY created_at DESC",
    )?;
    let rows = stmt.query_map([], row_to_tuple)?;
    case_rows_to_vec(rows)
}

/// Cases for one contact, newest first. The match is exact.
pub fn list_cases_by_contact(
    conn: &Connection,
    contact: &str,
) -> Result<Vec<Case>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, age, contact, description, severity, symptoms, result, created_at
         FROM cases WHERE contact = ?1 ORDER BY created_at DESC",
    )?;
    let rows = stmt.query_map(params![contact], row_to_tuple)?;
    case_rows_to_vec(rows)
}

/// Delete a case. Returns false when no such case exists.
pub fn delete_case(conn: &Connection, id: &Uuid) -> Result<bool, DatabaseError> {
    let affected = conn.execute("DELETE FROM cases WHERE id = ?1", params![id.to_string()])?;
    Ok(affected > 0)
}

type CaseRow = (
    String,
    String,
    Option<u32>,
    String,
    String,
    String,
    String,
    String,
    String,
);

fn row_to_tuple(row: &rusqlite::Row<'_>) -> rusqlite::Result<CaseRow> {
    Ok((
        row.get::<_, String>(0)?,
        row.get::<_, String>(1)?,
        row.get::<_, Option<u32>>(2)?,
        row.get::<_, String>(3)?,
        row.get::<_, String>(4)?,
        row.get::<_, String>(5)?,
        row.get::<_, String>(6)?,
        row.get::<_, String>(7)?,
        row.get::<_, String>(8)?,
    ))
}

fn case_rows_to_vec(
    rows: rusqlite::MappedRows<'_, impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<CaseRow>>,
) -> Result<Vec<Case>, DatabaseError> {
    let mut cases = Vec::new();
    for row in rows {
        cases.push(case_from_row(row?)?);
    }
    Ok(cases)
}

fn case_from_row(row: CaseRow) -> Result<Case, DatabaseError> {
    let (id, name, age, contact, description, severity, symptoms, result, created_at) = row;
    Ok(Case {
        id: Uuid::parse_str(&id).map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        name,
        age,
        contact,
        description,
        severity,
        symptoms: decode_json(&symptoms)?,
        result: decode_json::<TriageResult>(&result)?,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?
            .with_timezone(&Utc),
    })
}

fn encode_json<T: serde::Serialize>(value: &T) -> Result<String, DatabaseError> {
    serde_json::to_string(value).map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))
}

fn decode_json<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, DatabaseError> {
    serde_json::from_str(raw).map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;
    use crate::triage::{compute_triage, SymptomCatalogue};

    fn test_db() -> Connection {
        open_memory_database().unwrap()
    }

    fn make_case(name: &str, contact: &str, symptoms: &[&str]) -> Case {
        let catalogue = SymptomCatalogue::bundled();
        let requested: Vec<String> = symptoms.iter().map(|s| s.to_string()).collect();
        let result = compute_triage(&catalogue, "Moderate", &requested);
        Case {
            id: Uuid::new_v4(),
            name: name.into(),
            age: Some(52),
            contact: contact.into(),
            description: "test case".into(),
            severity: "Moderate".into(),
            symptoms: result.selected_symptoms.clone(),
            result,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn insert_and_get_round_trip() {
        let conn = test_db();
        let case = make_case("Ada", "ada@example.com", &["Chest Pain", "Dizziness"]);
        insert_case(&conn, &case).unwrap();

        let loaded = get_case(&conn, &case.id).unwrap().unwrap();
        assert_eq!(loaded.id, case.id);
        assert_eq!(loaded.name, "Ada");
        assert_eq!(loaded.age, Some(52));
        assert_eq!(loaded.symptoms, vec!["Chest Pain", "Dizziness"]);
        assert_eq!(loaded.result.score, case.result.score);
        assert_eq!(loaded.result.priority, case.result.priority);
        assert_eq!(loaded.created_at, case.created_at);
    }

    #[test]
    fn get_missing_case_returns_none() {
        let conn = test_db();
        assert!(get_case(&conn, &Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn list_orders_newest_first() {
        let conn = test_db();
        let mut old = make_case("First", "a@example.com", &["Fatigue"]);
        old.created_at = Utc::now() - chrono::Duration::hours(2);
        let new = make_case("Second", "b@example.com", &["Fatigue"]);
        insert_case(&conn, &old).unwrap();
        insert_case(&conn, &new).unwrap();

        let cases = list_cases(&conn).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name, "Second");
        assert_eq!(cases[1].name, "First");
    }

    #[test]
    fn list_by_contact_filters_exactly() {
        let conn = test_db();
        insert_case(&conn, &make_case("Ada", "ada@example.com", &["Fatigue"])).unwrap();
        insert_case(&conn, &make_case("Ben", "ben@example.com", &["Fatigue"])).unwrap();
        insert_case(&conn, &make_case("Ada again", "ada@example.com", &["Bleeding"])).unwrap();

        let cases = list_cases_by_contact(&conn, "ada@example.com").unwrap();
        assert_eq!(cases.len(), 2);
        assert!(cases.iter().all(|c| c.contact == "ada@example.com"));

        let none = list_cases_by_contact(&conn, "nobody@example.com").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn delete_reports_whether_case_existed() {
        let conn = test_db();
        let case = make_case("Ada", "ada@example.com", &["Fatigue"]);
        insert_case(&conn, &case).unwrap();

        assert!(delete_case(&conn, &case.id).unwrap());
        assert!(get_case(&conn, &case.id).unwrap().is_none());
        assert!(!delete_case(&conn, &case.id).unwrap());
    }

    #[test]
    fn stored_result_keeps_guidance_text() {
        let conn = test_db();
        let case = make_case("Ada", "ada@example.com", &["Chest Pain", "High Fever"]);
        insert_case(&conn, &case).unwrap();

        let loaded = get_case(&conn, &case.id).unwrap().unwrap();
        assert_eq!(loaded.result.label, case.result.label);
        assert_eq!(loaded.result.instructions, case.result.instructions);
        assert!(loaded.result.assessment.is_none());
    }
}
