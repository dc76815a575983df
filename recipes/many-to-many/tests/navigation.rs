use recipe_many_to_many::db::{course, enrollment, student};
use sea_orm::{ActiveModelTrait, DatabaseConnection, ModelTrait, Set};

async fn setup() -> DatabaseConnection {
    let db = cookbook_db::connect().await.unwrap();
    cookbook_db::create_table(&db, student::Entity)
        .await
        .unwrap();
    cookbook_db::create_table(&db, course::Entity).await.unwrap();
    cookbook_db::create_table(&db, enrollment::Entity)
        .await
        .unwrap();
    db
}

async fn insert_student(db: &DatabaseConnection, name: &str) -> student::Model {
    student::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn insert_course(db: &DatabaseConnection, name: &str) -> course::Model {
    course::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn enroll(db: &DatabaseConnection, student: &student::Model, course: &course::Model) {
    enrollment::ActiveModel {
        student_id: Set(student.id),
        course_id: Set(course.id),
    }
    .insert(db)
    .await
    .unwrap();
}

#[tokio::test]
async fn navigation_crosses_the_association_table_both_ways() {
    let db = setup().await;
    let s1 = insert_student(&db, "Student1").await;
    let s2 = insert_student(&db, "Student2").await;
    let c1 = insert_course(&db, "Course1").await;
    let c2 = insert_course(&db, "Course2").await;

    enroll(&db, &s1, &c1).await;
    enroll(&db, &s1, &c2).await;
    enroll(&db, &s2, &c1).await;

    let c1_students = c1.find_related(student::Entity).all(&db).await.unwrap();
    assert_eq!(c1_students.len(), 2);

    let s1_courses = s1.find_related(course::Entity).all(&db).await.unwrap();
    assert_eq!(s1_courses.len(), 2);

    let s2_courses = s2.find_related(course::Entity).all(&db).await.unwrap();
    assert_eq!(s2_courses, vec![c1]);
}

#[tokio::test]
async fn unenrolled_student_has_no_courses() {
    let db = setup().await;
    let s1 = insert_student(&db, "Student1").await;
    insert_course(&db, "Course1").await;

    let courses = s1.find_related(course::Entity).all(&db).await.unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn duplicate_association_rows_are_rejected() {
    let db = setup().await;
    let s1 = insert_student(&db, "Student1").await;
    let c1 = insert_course(&db, "Course1").await;

    enroll(&db, &s1, &c1).await;

    let duplicate = enrollment::ActiveModel {
        student_id: Set(s1.id),
        course_id: Set(c1.id),
    }
    .insert(&db)
    .await;
    assert!(duplicate.is_err());
}

#[tokio::test]
async fn demo_runs() {
    recipe_many_to_many::run().await.unwrap();
}
