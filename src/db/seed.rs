// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Initial activities and teacher accounts.

use crate::error::Result;
use crate::models::{Activity, Role, ScheduleDetails, Teacher};
use crate::services::hash_password;

struct ActivitySeed {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    days: &'static [&'static str],
    start_time: &'static str,
    end_time: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

struct TeacherSeed {
    username: &'static str,
    display_name: &'static str,
    password: &'static str,
    role: Role,
}

const ACTIVITIES: &[ActivitySeed] = &[
    ActivitySeed {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Mondays and Fridays, 3:15 PM - 4:45 PM",
        days: &["Monday", "Friday"],
        start_time: "15:15",
        end_time: "16:45",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    ActivitySeed {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 7:00 AM - 8:00 AM",
        days: &["Tuesday", "Thursday"],
        start_time: "07:00",
        end_time: "08:00",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    ActivitySeed {
        name: "Morning Fitness",
        description: "Early morning physical training and exercises",
        schedule: "Mondays, Wednesdays, Fridays, 6:30 AM - 7:45 AM",
        days: &["Monday", "Wednesday", "Friday"],
        start_time: "06:30",
        end_time: "07:45",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    ActivitySeed {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 5:30 PM",
        days: &["Tuesday", "Thursday"],
        start_time: "15:30",
        end_time: "17:30",
        max_participants: 22,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    ActivitySeed {
        name: "Basketball Team",
        description: "Practice and compete in basketball tournaments",
        schedule: "Wednesdays and Fridays, 3:15 PM - 5:00 PM",
        days: &["Wednesday", "Friday"],
        start_time: "15:15",
        end_time: "17:00",
        max_participants: 15,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    ActivitySeed {
        name: "Art Club",
        description: "Explore various art techniques and create masterpieces",
        schedule: "Thursdays, 3:15 PM - 5:00 PM",
        days: &["Thursday"],
        start_time: "15:15",
        end_time: "17:00",
        max_participants: 15,
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    ActivitySeed {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 3:30 PM - 5:30 PM",
        days: &["Monday", "Wednesday"],
        start_time: "15:30",
        end_time: "17:30",
        max_participants: 20,
        participants: &["ella@mergington.edu", "scarlett@mergington.edu"],
    },
    ActivitySeed {
        name: "Math Club",
        description: "Solve challenging problems and prepare for math competitions",
        schedule: "Tuesdays, 7:15 AM - 8:00 AM",
        days: &["Tuesday"],
        start_time: "07:15",
        end_time: "08:00",
        max_participants: 10,
        participants: &["james@mergington.edu", "benjamin@mergington.edu"],
    },
    ActivitySeed {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 3:30 PM - 5:30 PM",
        days: &["Friday"],
        start_time: "15:30",
        end_time: "17:30",
        max_participants: 12,
        participants: &["charlotte@mergington.edu", "amelia@mergington.edu"],
    },
    ActivitySeed {
        name: "Weekend Robotics Workshop",
        description: "Build and program robots in our state-of-the-art workshop",
        schedule: "Saturdays, 10:00 AM - 2:00 PM",
        days: &["Saturday"],
        start_time: "10:00",
        end_time: "14:00",
        max_participants: 15,
        participants: &["ethan@mergington.edu", "oliver@mergington.edu"],
    },
    ActivitySeed {
        name: "Science Olympiad",
        description: "Weekend science competition preparation for regional and state events",
        schedule: "Saturdays, 1:00 PM - 4:00 PM",
        days: &["Saturday"],
        start_time: "13:00",
        end_time: "16:00",
        max_participants: 18,
        participants: &["isabella@mergington.edu", "lucas@mergington.edu"],
    },
    ActivitySeed {
        name: "Sunday Chess Tournament",
        description: "Weekly tournament for serious chess players with rankings",
        schedule: "Sundays, 2:00 PM - 5:00 PM",
        days: &["Sunday"],
        start_time: "14:00",
        end_time: "17:00",
        max_participants: 16,
        participants: &["william@mergington.edu", "jacob@mergington.edu"],
    },
    ActivitySeed {
        name: "Manga Maniacs",
        description: "Mergulhe no universo épico dos mangás japoneses! Descubra mundos de ninjas, magos, heróis e aventuras incríveis. Discuta suas séries favoritas, desenhe seus próprios personagens e faça parte de uma comunidade apaixonada pela arte japonesa que conquistou o mundo!",
        schedule: "Tuesdays, 7:00 PM - 8:00 PM",
        days: &["Tuesday"],
        start_time: "19:00",
        end_time: "20:00",
        max_participants: 15,
        participants: &[],
    },
];

const TEACHERS: &[TeacherSeed] = &[
    TeacherSeed {
        username: "mrodriguez",
        display_name: "Ms. Rodriguez",
        password: "art123",
        role: Role::Teacher,
    },
    TeacherSeed {
        username: "mchen",
        display_name: "Mr. Chen",
        password: "chess456",
        role: Role::Teacher,
    },
    TeacherSeed {
        username: "principal",
        display_name: "Principal Martinez",
        password: "admin789",
        role: Role::Admin,
    },
];

/// Build the initial activity documents.
pub fn initial_activities() -> Vec<Activity> {
    ACTIVITIES
        .iter()
        .map(|seed| Activity {
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            schedule: seed.schedule.to_string(),
            schedule_details: ScheduleDetails::new(seed.days, seed.start_time, seed.end_time),
            max_participants: seed.max_participants,
            participants: seed.participants.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}

/// Build the initial teacher accounts, hashing each default password.
pub fn initial_teachers() -> Result<Vec<Teacher>> {
    TEACHERS
        .iter()
        .map(|seed| -> Result<Teacher> {
            Ok(Teacher {
                username: seed.username.to_string(),
                display_name: seed.display_name.to_string(),
                password: hash_password(seed.password)?,
                role: seed.role,
            })
        })
        .collect()
}
