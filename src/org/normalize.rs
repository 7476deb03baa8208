use std::collections::HashSet;

use serde_json::Value;

use super::graph::OrgNode;

// Source records arrive as loosely-typed bags and use any of several field
// spellings per concept; each canonical attribute gets a prioritized alias
// list tried in order.
const EMPLOYEE_ID_FIELDS: &[&str] = &["employeeId", "employee_id", "empId", "employeeNumber"];
const GENERIC_ID_FIELDS: &[&str] = &["id", "_id", "uid"];
const EMAIL_FIELDS: &[&str] = &["email", "workEmail", "work_email"];
const FULL_NAME_FIELDS: &[&str] = &["name", "fullName", "full_name", "displayName"];
const FIRST_NAME_FIELDS: &[&str] = &["firstName", "first_name", "givenName"];
const LAST_NAME_FIELDS: &[&str] = &["lastName", "last_name", "surname", "familyName"];
const TITLE_FIELDS: &[&str] = &["title", "jobTitle", "job_title", "position", "role"];
const DEPARTMENT_FIELDS: &[&str] = &["department", "dept", "team", "division"];
const STATUS_FIELDS: &[&str] = &["status", "employmentStatus", "employment_status"];
const MANAGER_NAME_FIELDS: &[&str] = &[
    "manager",
    "managerName",
    "manager_name",
    "reportsTo",
    "reports_to",
    "supervisor",
];
const MANAGER_ID_FIELDS: &[&str] = &[
    "managerId",
    "manager_id",
    "managerEmployeeId",
    "supervisorId",
];
const PHONE_FIELDS: &[&str] = &["phone", "phoneNumber", "phone_number", "mobile"];
const LOCATION_FIELDS: &[&str] = &["location", "office", "site", "city"];
const START_DATE_FIELDS: &[&str] = &["startDate", "start_date", "hireDate", "hire_date", "joined"];
const TYPE_FIELDS: &[&str] = &["type", "employeeType", "employee_type", "employmentType"];

/// Maps raw records into canonical nodes. Missing fields are never an
/// error; documented defaults apply and identifiers are synthesized from
/// the record's position as a last resort.
pub fn normalize_records(records: &[Value]) -> Vec<OrgNode> {
    let mut nodes = Vec::with_capacity(records.len());
    let mut taken = HashSet::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let first = first_field(record, FIRST_NAME_FIELDS);
        let last = first_field(record, LAST_NAME_FIELDS);

        let explicit_id = first_field(record, EMPLOYEE_ID_FIELDS)
            .or_else(|| first_field(record, GENERIC_ID_FIELDS))
            .or_else(|| first_field(record, EMAIL_FIELDS));
        let candidate = explicit_id.clone().unwrap_or_else(|| {
            format!(
                "{}-{}",
                first.as_deref().unwrap_or("member"),
                last.clone().unwrap_or_else(|| index.to_string())
            )
        });
        let id = if taken.insert(candidate.clone()) {
            candidate
        } else {
            // Ids are unique within a build; a repeated candidate gets the
            // record index appended, same as the synthesized form. The
            // suffixed form can itself be taken by an explicit id, so keep
            // bumping until an unused one is found.
            let mut bump = index;
            let mut suffixed = format!("{candidate}-{bump}");
            while !taken.insert(suffixed.clone()) {
                bump += 1;
                suffixed = format!("{candidate}-{bump}");
            }
            suffixed
        };

        let name = first_field(record, FULL_NAME_FIELDS)
            .or_else(|| match (&first, &last) {
                (Some(first), Some(last)) => Some(format!("{first} {last}")),
                (Some(first), None) => Some(first.clone()),
                (None, Some(last)) => Some(last.clone()),
                (None, None) => None,
            })
            .or(explicit_id)
            .unwrap_or_else(|| format!("Employee {}", index + 1));

        nodes.push(OrgNode {
            id,
            name,
            title: first_field(record, TITLE_FIELDS).unwrap_or_default(),
            department: first_field(record, DEPARTMENT_FIELDS)
                .unwrap_or_else(|| "General".to_string()),
            status: first_field(record, STATUS_FIELDS).unwrap_or_else(|| "Active".to_string()),
            manager_name: first_field(record, MANAGER_NAME_FIELDS).unwrap_or_default(),
            manager_id: None,
            raw_manager_id: first_field(record, MANAGER_ID_FIELDS),
            email: first_field(record, EMAIL_FIELDS).unwrap_or_default(),
            phone: first_field(record, PHONE_FIELDS).unwrap_or_default(),
            location: first_field(record, LOCATION_FIELDS).unwrap_or_else(|| "Remote".to_string()),
            start_date: first_field(record, START_DATE_FIELDS).unwrap_or_default(),
            employee_type: first_field(record, TYPE_FIELDS)
                .unwrap_or_else(|| "Employee".to_string()),
        });
    }

    nodes
}

fn first_field(record: &Value, aliases: &[&str]) -> Option<String> {
    let object = record.as_object()?;
    for alias in aliases {
        match object.get(*alias) {
            Some(Value::String(text)) if !text.trim().is_empty() => {
                return Some(text.trim().to_string());
            }
            Some(Value::Number(number)) => return Some(number.to_string()),
            _ => {}
        }
    }
    None
}
