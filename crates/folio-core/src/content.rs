//! Canned terminal content.
//!
//! Fixed strings the commands draw from. The randomized commands pick one
//! entry per invocation with a uniform draw; the lists themselves never
//! change at runtime.

/// Transcript lines seeding a new session.
pub const WELCOME: &[&str] = &[
    "Welcome to Zahra's Terminal!",
    "Type \"help\" to see available commands.",
    "",
];

pub const GREETING_MORNING: &str = "Good morning! ☀️ Hope you have a great day!";
pub const GREETING_AFTERNOON: &str = "Good afternoon! 🌞 How can I help you today?";
pub const GREETING_EVENING: &str = "Good evening! 🌙 Hope you had a productive day!";

/// Fun facts for the `fact` command.
pub const FACTS: &[&str] = &[
    "Honey never spoils. Archaeologists have found pots of honey in ancient tombs that are over 3,000 years old!",
    "A cloud can weigh more than a million pounds.",
    "Bananas are berries, but strawberries are not.",
    "Octopuses have three hearts and blue blood.",
    "There are more stars in the universe than grains of sand on all the Earth's beaches.",
    "A single strand of spaghetti is called a \"spaghetto\".",
    "Wombat poop is cube-shaped.",
    "Sharks have been around longer than trees.",
    "A day on Venus is longer than its year.",
];

pub const WORKHOURS: &str =
    "I typically work from 9 AM to 5 PM (GMT) on weekdays. Feel free to reach out!";

/// Mood strings for the `mood` command.
pub const MOODS: &[&str] = &[
    "Feeling productive today! 🚀",
    "Just vibing and coding. 😎",
    "Can't stop, won't stop! 💻",
    "Feeling a bit tired, but pushing through! 💪",
    "In the zone, building something awesome! ⚡",
    "Learning new things and loving it! 📚",
];

pub const CONTACT_INFO: &str = "\
You can reach me through:
  LinkedIn: https://www.linkedin.com/in/zfahmed/
  GitHub: https://github.com/zvhra

  Or use the contact form on the main page!";

/// Quotes for the `quote` command.
pub const QUOTES: &[&str] = &[
    "\"The only way to do great work is to love what you do.\" – Steve Jobs",
    "\"Life is 10% what happens to us and 90% how we react to it.\" – Charles R. Swindoll",
    "\"You miss 100% of the shots you don't take.\" – Wayne Gretzky",
    "\"The best time to plant a tree was 20 years ago. The second best time is now.\" – Chinese Proverb",
    "\"It does not matter how slowly you go as long as you do not stop.\" – Confucius",
    "\"Success usually comes to those who are too busy to be looking for it.\" – Henry David Thoreau",
    "\"Opportunities don't happen. You create them.\" – Chris Grosser",
    "\"Code is like humor. When you have to explain it, it's bad.\" – Cory House",
];

pub const ABOUT: &str = "\
About Zahra:
  I'm a Computing Graduate with a Bachelor's Honours degree.
  I have hands-on experience in full-stack development, software
  engineering, and project management. My skills span across C#,
  Python, Java, and web technologies, with a strong focus on
  creating efficient, user-centric applications.

  Technologies I work with:
  • Proficient: C#, .NET Core, ASP.NET, SQL, React, Python
  • Advanced: HTML, CSS, JavaScript, TypeScript, Vue.js, TailwindCSS, Node.js, MongoDB
  • Familiar: Java, Docker, Azure

  Location: London, UK
  Education: BSc (Hons) Computing";

pub const PROJECTS: &str = "\
My Featured Projects:
  1. Fitness Social Media Platform
     - Full-stack C#/.NET application
     - GitHub: https://github.com/zvhra/fitnessplatform

  2. Internet Relay Chat System
     - Java-based IRC system
     - GitHub: https://github.com/zvhra/ircsystem

  3. Gadgets Information System
     - C# desktop application
     - GitHub: https://github.com/zvhra/gadgets

  Visit my portfolio homepage to see more details!";
