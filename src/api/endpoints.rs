//! Endpoint paths, relative to the configured base URL.

pub fn students() -> String {
    "/students/".to_string()
}

pub fn student(id: i64) -> String {
    format!("/students/{}/", id)
}

pub fn grades_summary(student_id: i64) -> String {
    format!("/students/{}/grades_summary/", student_id)
}

pub fn subjects() -> String {
    "/subjects/".to_string()
}

pub fn subject(id: i64) -> String {
    format!("/subjects/{}/", id)
}

pub fn enrollments() -> String {
    "/enrollments/".to_string()
}

pub fn enrollments_for_student(student_id: i64) -> String {
    format!("/enrollments/?student_id={}", student_id)
}

pub fn enrollment(id: i64) -> String {
    format!("/enrollments/{}/", id)
}

pub fn grades() -> String {
    "/grades/".to_string()
}

pub fn grades_for_enrollment(enrollment_id: i64) -> String {
    format!("/grades/?enrollment_id={}", enrollment_id)
}

pub fn grade(id: i64) -> String {
    format!("/grades/{}/", id)
}
