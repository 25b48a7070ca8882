use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Subject {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Semester {
    pub id: &'static str,
    pub title: &'static str,
    pub subjects: &'static [Subject],
}

/// The official BCA course mapping. This is curriculum data, not user
/// content, so it ships compiled in instead of living in the store.
pub const SEMESTERS: &[Semester] = &[
    Semester {
        id: "1",
        title: "Semester 1",
        subjects: &[
            Subject { id: "c1", name: "C1: Programming Fundamentals using C/C++" },
            Subject { id: "c2", name: "C2: Computer System Architecture" },
            Subject { id: "aecc1", name: "AECC: English/Hindi Communication" },
            Subject { id: "ge1a", name: "GE 1A: Mathematics" },
            Subject { id: "ge1b", name: "GE 1B: Physics" },
        ],
    },
    Semester {
        id: "2",
        title: "Semester 2",
        subjects: &[
            Subject { id: "c3", name: "C3: Programming in JAVA" },
            Subject { id: "c4", name: "C4: Discrete Structures" },
            Subject { id: "aecc2", name: "AECC: Environmental Studies (EVS)" },
            Subject { id: "ge2a", name: "GE 2A: Mathematics" },
            Subject { id: "ge2b", name: "GE 2B: Physics" },
        ],
    },
    Semester {
        id: "3",
        title: "Semester 3",
        subjects: &[
            Subject { id: "c5", name: "C5: Data Structures" },
            Subject { id: "c6", name: "C6: Operating Systems" },
            Subject { id: "c7", name: "C7: Computer Networks" },
            Subject { id: "sec1", name: "SEC 1: Elem. Computer App Softwares" },
            Subject { id: "ge3a", name: "GE 3A: Mathematics" },
            Subject { id: "ge3b", name: "GE 3B: Physics" },
        ],
    },
    Semester {
        id: "4",
        title: "Semester 4",
        subjects: &[
            Subject { id: "c8", name: "C8: Design and Analysis of Algorithms" },
            Subject { id: "c9", name: "C9: Software Engineering Theory" },
            Subject { id: "c10", name: "C10: Database Management Systems" },
            Subject { id: "sec2", name: "SEC 2: HTML & PHP Programming" },
            Subject { id: "ge4a", name: "GE 4A: Mathematics" },
            Subject { id: "ge4b", name: "GE 4B: Physics" },
        ],
    },
    Semester {
        id: "5",
        title: "Semester 5",
        subjects: &[
            Subject { id: "c11", name: "C11: Internet Technologies" },
            Subject { id: "c12", name: "C12: Theory of Computation" },
            Subject { id: "dse1", name: "DSE 1: Information Security" },
            Subject { id: "dse2", name: "DSE 2: Cloud Computing" },
        ],
    },
    Semester {
        id: "6",
        title: "Semester 6",
        subjects: &[
            Subject { id: "c13", name: "C13: Artificial Intelligence" },
            Subject { id: "c14", name: "C14: Computer Graphics" },
            Subject { id: "dse3", name: "DSE 3: Numerical Methods" },
            Subject { id: "dse4", name: "DSE 4: OJT & Project Work" },
        ],
    },
];

pub fn find_semester(id: &str) -> Option<&'static Semester> {
    SEMESTERS.iter().find(|semester| semester.id == id)
}
