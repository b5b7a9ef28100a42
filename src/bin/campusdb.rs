//! Line-oriented console front end over the [`Registrar`].
//!
//! Reads one command per line from stdin. `help` lists the commands.
//! Set `RUST_LOG=campusdb=debug` to watch index splits and record updates.

use std::io::{self, BufRead, Write};

use campusdb::common::StudentId;
use campusdb::records::Registrar;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut registrar = Registrar::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("campusdb - type 'help' for commands");
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let args: Vec<&str> = line.split_whitespace().collect();
        if args.is_empty() {
            continue;
        }
        if args[0] == "quit" || args[0] == "exit" {
            break;
        }
        match run_command(&mut registrar, &args) {
            Ok(output) => println!("{output}"),
            Err(message) => println!("error: {message}"),
        }
    }
    Ok(())
}

fn run_command(registrar: &mut Registrar, args: &[&str]) -> Result<String, String> {
    match args {
        ["help"] => Ok(HELP.to_string()),

        ["add-student", id, name @ ..] if !name.is_empty() => {
            let id = parse_student_id(id)?;
            registrar.add_student(id, name.join(" "));
            Ok(format!("student {id} added"))
        }

        ["add-course", id, capacity, name @ ..] if !name.is_empty() => {
            let capacity: usize = capacity
                .parse()
                .map_err(|_| format!("invalid capacity {capacity:?}"))?;
            registrar.add_course(*id, name.join(" "), capacity);
            Ok(format!("course {id} added ({capacity} seats)"))
        }

        ["add-faculty", id, name @ ..] if !name.is_empty() => {
            registrar.add_faculty(*id, name.join(" "));
            Ok(format!("faculty {id} added"))
        }

        ["assign", course_id, faculty_id] => {
            registrar
                .assign_faculty(course_id, faculty_id)
                .map_err(|e| e.to_string())?;
            Ok(format!("{faculty_id} assigned to {course_id}"))
        }

        ["enroll", student_id, course_id] => {
            let id = parse_student_id(student_id)?;
            registrar.enroll(id, course_id).map_err(|e| e.to_string())?;
            Ok(format!("student {id} enrolled in {course_id}"))
        }

        ["grade", student_id, course_id, grade] => {
            let id = parse_student_id(student_id)?;
            let grade: f32 = grade.parse().map_err(|_| format!("invalid grade {grade:?}"))?;
            registrar
                .set_grade(id, course_id, grade)
                .map_err(|e| e.to_string())?;
            Ok(format!("grade recorded for student {id} in {course_id}"))
        }

        ["show", student_id] => {
            let id = parse_student_id(student_id)?;
            let student = registrar
                .student(id)
                .ok_or_else(|| format!("student {id} not found"))?;
            let mut out = format!("{}: {}", student.id(), student.name());
            for course_id in student.enrolled_courses() {
                out.push_str(&format!("\n  - {course_id}"));
                if let Some(grade) = student.grade(course_id) {
                    out.push_str(&format!(" (grade: {grade})"));
                }
            }
            Ok(out)
        }

        ["roster"] => Ok(format_roster(registrar.roster())),

        ["roster", from] => {
            let from = parse_student_id(from)?;
            Ok(format_roster(registrar.roster_from(from)))
        }

        ["courses"] => {
            let mut lines: Vec<String> = registrar
                .courses()
                .map(|c| {
                    format!(
                        "{}: {} ({}/{} enrolled)",
                        c.id(),
                        c.name(),
                        c.enrolled_students().len(),
                        c.capacity()
                    )
                })
                .collect();
            lines.sort();
            if lines.is_empty() {
                Ok("no courses".to_string())
            } else {
                Ok(lines.join("\n"))
            }
        }

        _ => Err("unrecognized command; type 'help'".to_string()),
    }
}

fn parse_student_id(raw: &str) -> Result<StudentId, String> {
    raw.parse::<u32>()
        .map(StudentId::new)
        .map_err(|_| format!("invalid student id {raw:?}"))
}

fn format_roster<'a>(students: impl Iterator<Item = &'a campusdb::records::Student>) -> String {
    let lines: Vec<String> = students
        .map(|s| format!("{}: {}", s.id(), s.name()))
        .collect();
    if lines.is_empty() {
        "no students".to_string()
    } else {
        lines.join("\n")
    }
}

const HELP: &str = "\
commands:
  add-student <id> <name...>
  add-course <id> <capacity> <name...>
  add-faculty <id> <name...>
  assign <course-id> <faculty-id>
  enroll <student-id> <course-id>
  grade <student-id> <course-id> <value>
  show <student-id>
  roster [from-id]
  courses
  quit";
