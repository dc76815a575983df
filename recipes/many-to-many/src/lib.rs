//! Students and courses associated through a table that holds only the two
//! foreign keys. Navigation on both ends goes through the association
//! entity, and its composite primary key keeps association rows unique.

pub mod db;

use anyhow::Context;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};

use db::{course, enrollment, student};

async fn enroll(
    db: &sea_orm::DatabaseConnection,
    student: &student::Model,
    course: &course::Model,
) -> Result<enrollment::Model, sea_orm::DbErr> {
    enrollment::ActiveModel {
        student_id: Set(student.id),
        course_id: Set(course.id),
    }
    .insert(db)
    .await
}

pub async fn run() -> anyhow::Result<()> {
    let db = cookbook_db::connect().await?;
    cookbook_db::create_table(&db, student::Entity).await?;
    cookbook_db::create_table(&db, course::Entity).await?;
    cookbook_db::create_table(&db, enrollment::Entity).await?;

    println!("==> insert three students and two courses");
    let mut students = Vec::new();
    for name in ["Student1", "Student2", "Student3"] {
        students.push(
            student::ActiveModel {
                name: Set(name.to_owned()),
                ..Default::default()
            }
            .insert(&db)
            .await?,
        );
    }
    let mut courses = Vec::new();
    for name in ["Course1", "Course2"] {
        courses.push(
            course::ActiveModel {
                name: Set(name.to_owned()),
                ..Default::default()
            }
            .insert(&db)
            .await?,
        );
    }

    println!("==> enroll students 1 and 2 in course 1");
    enroll(&db, &students[0], &courses[0]).await?;
    enroll(&db, &students[1], &courses[0]).await?;

    // The composite primary key rejects a duplicate association row.
    assert!(enroll(&db, &students[0], &courses[0]).await.is_err());

    println!("==> course1.students");
    let course1 = course::Entity::find_by_id(courses[0].id)
        .one(&db)
        .await?
        .context("course 1 not found")?;
    let enrolled = course1.find_related(student::Entity).all(&db).await?;
    println!(" -> enrolled = {enrolled:#?}");
    assert_eq!(enrolled.len(), 2);

    println!("==> student1.courses");
    let student1 = student::Entity::find_by_id(students[0].id)
        .one(&db)
        .await?
        .context("student 1 not found")?;
    let taken = student1.find_related(course::Entity).all(&db).await?;
    println!(" -> taken = {taken:#?}");
    assert_eq!(taken.len(), 1);

    println!("==> student3.courses (never enrolled)");
    let none = students[2].find_related(course::Entity).all(&db).await?;
    println!(" -> taken = {none:#?}");
    assert!(none.is_empty());

    Ok(())
}
