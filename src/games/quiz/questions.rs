//! Fixed question bank for the knowledge quiz.

pub struct Question {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub category: &'static str,
}

pub const QUESTIONS: [Question; 8] = [
    Question {
        question: "What does HTML stand for?",
        options: [
            "Hyper Text Markup Language",
            "High Tech Modern Language",
            "Home Tool Markup Language",
            "Hyperlink and Text Markup Language",
        ],
        correct: 0,
        category: "Web Development",
    },
    Question {
        question: "Which CSS property is used to change text color?",
        options: ["font-color", "text-color", "color", "foreground-color"],
        correct: 2,
        category: "Web Development",
    },
    Question {
        question: "What is the correct way to declare a JavaScript variable?",
        options: ["variable myVar;", "v myVar;", "var myVar;", "declare myVar;"],
        correct: 2,
        category: "Programming",
    },
    Question {
        question: "Which company developed React?",
        options: ["Google", "Microsoft", "Facebook", "Apple"],
        correct: 2,
        category: "Programming",
    },
    Question {
        question: "What does CPU stand for?",
        options: [
            "Central Processing Unit",
            "Computer Personal Unit",
            "Central Program Utility",
            "Computer Processing Unit",
        ],
        correct: 0,
        category: "Computer Science",
    },
    Question {
        question: "Which programming language is known as the 'language of the web'?",
        options: ["Python", "Java", "JavaScript", "C++"],
        correct: 2,
        category: "Programming",
    },
    Question {
        question: "What is the purpose of Git?",
        options: [
            "Web hosting",
            "Version control",
            "Database management",
            "Image editing",
        ],
        correct: 1,
        category: "Development Tools",
    },
    Question {
        question: "Which HTTP status code indicates 'Not Found'?",
        options: ["200", "301", "404", "500"],
        correct: 2,
        category: "Web Development",
    },
];
