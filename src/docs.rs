use serde::Serialize;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use lectern_models::auth::{AuthResponse, LoginDto};
use lectern_models::courses::{Course, CreateCourseDto, UpdateCourseDto};
use lectern_models::enrollments::EnrollmentDto;
use lectern_models::instructors::{Instructor, RegisterInstructorDto, UpdateInstructorDto};
use lectern_models::lectures::{CreateLectureDto, Lecture, UpdateLectureDto};
use lectern_models::reviews::{CreateReviewDto, Review};
use lectern_models::students::{RegisterStudentDto, Student, UpdateStudentProfileDto};

/// Error body returned by every failing endpoint.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::students::controller::register_student,
        crate::modules::students::controller::login_student,
        crate::modules::students::controller::get_student_profile,
        crate::modules::students::controller::update_student_profile,
        crate::modules::students::controller::courses_of_student,
        crate::modules::instructors::controller::register_instructor,
        crate::modules::instructors::controller::login_instructor,
        crate::modules::instructors::controller::get_instructor,
        crate::modules::instructors::controller::update_instructor,
        crate::modules::instructors::controller::courses_of_instructor,
        crate::modules::courses::controller::list_courses,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::search_courses,
        crate::modules::courses::controller::recommended_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::lectures_of_course,
        crate::modules::courses::controller::reviews_of_course,
        crate::modules::courses::controller::students_of_course,
        crate::modules::enrollments::controller::enroll_student,
        crate::modules::enrollments::controller::unenroll_student,
        crate::modules::lectures::controller::add_lecture,
        crate::modules::lectures::controller::get_lecture_content,
        crate::modules::lectures::controller::update_lecture,
        crate::modules::lectures::controller::delete_lecture,
        crate::modules::reviews::controller::add_review,
    ),
    components(
        schemas(
            ErrorResponse,
            AuthResponse,
            LoginDto,
            Student,
            RegisterStudentDto,
            UpdateStudentProfileDto,
            Instructor,
            RegisterInstructorDto,
            UpdateInstructorDto,
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            EnrollmentDto,
            Lecture,
            CreateLectureDto,
            UpdateLectureDto,
            Review,
            CreateReviewDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Students", description = "Student registration, login, and profiles"),
        (name = "Instructors", description = "Instructor registration, login, and profiles"),
        (name = "Courses", description = "Course catalog"),
        (name = "Enrollments", description = "Student-course enrollment"),
        (name = "Lectures", description = "Lecture content"),
        (name = "Reviews", description = "Course reviews")
    ),
    info(
        title = "Lectern API",
        description = "Course platform backend with role-based access control"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
