//! Qualification records reference `person` twice: once for the student and
//! once for the instructor. Each side of each link is named explicitly, so a
//! person can tell the records they earned apart from the ones they signed
//! off, and a record can navigate to either person.

pub mod db;

use anyhow::Context;
use sea_orm::{ActiveModelTrait, ModelTrait, Set};
use uuid::Uuid;

use db::{course, event, person, qualification_record};

pub async fn run() -> anyhow::Result<()> {
    let db = cookbook_db::connect().await?;
    cookbook_db::create_table(&db, person::Entity).await?;
    cookbook_db::create_table(&db, event::Entity).await?;
    cookbook_db::create_table(&db, course::Entity).await?;
    cookbook_db::create_table(&db, qualification_record::Entity).await?;

    println!("==> insert a student, an instructor, a course, and an event");
    let student = person::ActiveModel {
        uuid: Set(Uuid::new_v4()),
        name: Set("Student".to_owned()),
    }
    .insert(&db)
    .await?;
    let instructor = person::ActiveModel {
        uuid: Set(Uuid::new_v4()),
        name: Set("Instructor".to_owned()),
    }
    .insert(&db)
    .await?;
    let course = course::ActiveModel {
        uuid: Set(Uuid::new_v4()),
        name: Set("Course1".to_owned()),
    }
    .insert(&db)
    .await?;
    let event = event::ActiveModel {
        uuid: Set(Uuid::new_v4()),
        name: Set("Event1".to_owned()),
    }
    .insert(&db)
    .await?;

    println!("==> record the qualification");
    let record = qualification_record::ActiveModel {
        uuid: Set(Uuid::new_v4()),
        student_uuid: Set(student.uuid),
        instructor_uuid: Set(instructor.uuid),
        event_uuid: Set(event.uuid),
        course_uuid: Set(course.uuid),
        timestamp: Set(chrono::Utc::now()),
    }
    .insert(&db)
    .await?;
    println!(" -> record = {record:#?}");

    let qualifications = student
        .find_linked(person::Qualifications)
        .all(&db)
        .await?;
    let instructed = student.find_linked(person::Instructed).all(&db).await?;
    println!(
        " -> student: {} qualification(s), {} instructed",
        qualifications.len(),
        instructed.len()
    );
    assert_eq!(qualifications.len(), 1);
    assert_eq!(instructed.len(), 0);

    let qualifications = instructor
        .find_linked(person::Qualifications)
        .all(&db)
        .await?;
    let instructed = instructor.find_linked(person::Instructed).all(&db).await?;
    println!(
        " -> instructor: {} qualification(s), {} instructed",
        qualifications.len(),
        instructed.len()
    );
    assert_eq!(qualifications.len(), 0);
    assert_eq!(instructed.len(), 1);

    println!("==> navigate the record to its event and course");
    let event = record
        .find_related(event::Entity)
        .one(&db)
        .await?
        .context("record has no event")?;
    let course = record
        .find_related(course::Entity)
        .one(&db)
        .await?
        .context("record has no course")?;
    println!(" -> event = {:?}, course = {:?}", event.name, course.name);

    Ok(())
}
