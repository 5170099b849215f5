// Assistant reply texts for the intake conversation.
// Templates use `{placeholder}` markers filled by the dialogue engine.

pub const WELCOME: &str = "\
Hello! 👋 Welcome to TalentScout's AI Hiring Assistant!

I'm here to help with your initial screening for technology positions. \
I'll gather some basic information about you and ask a few technical questions based on your expertise.

This should take about 5-10 minutes. You can end our conversation anytime by typing 'exit'.

Let's get started! What's your full name?";

pub const ASK_EMAIL_TEMPLATE: &str =
    "Nice to meet you, {full_name}! 😊\n\nCould you please provide your email address?";
pub const ASK_PHONE: &str = "Great! Now, what's your phone number?";
pub const ASK_EXPERIENCE: &str =
    "Perfect! How many years of professional experience do you have in technology?";
pub const ASK_POSITION: &str = "Thanks! What position(s) are you interested in? \
(e.g., Software Developer, Data Scientist, DevOps Engineer)";
pub const ASK_LOCATION: &str = "Excellent! What's your current location (city, state/country)?";
pub const ASK_TECH_STACK: &str = r#"Now for the technical part! 💻

Please tell me about your tech stack. List the programming languages, frameworks, databases, and tools you're proficient in.

For example: "Python, Django, React, PostgreSQL, AWS, Docker""#;

pub const REPROMPT_NAME: &str = "Please provide your full name to continue.";
pub const REPROMPT_EMAIL: &str =
    "Please provide a valid email address (e.g., john@example.com).";
pub const REPROMPT_PHONE: &str =
    "Please provide a valid phone number (10 to 15 digits, e.g., +1 555-123-4567).";
pub const REPROMPT_EXPERIENCE: &str = "Please specify your years of experience.";
pub const REPROMPT_POSITION: &str = "Please specify the position you're interested in.";
pub const REPROMPT_LOCATION: &str = "Please provide your current location.";
pub const REPROMPT_TECH_STACK_BLANK: &str =
    "Please tell me about your technical skills and tools you use.";
pub const REPROMPT_TECH_STACK_UNRECOGNIZED: &str = "I couldn't identify specific technologies. \
Please mention specific programming languages, frameworks, or tools you know \
(e.g., Python, React, MySQL, etc.).";
pub const REPROMPT_ANSWER: &str = "Please provide an answer to continue with the next question.";

pub const TECH_STACK_ACCEPTED_TEMPLATE: &str = "\
Perfect! I've identified your expertise in: {tech_list}

Now I'll ask you {question_count} technical questions to assess your proficiency.

**Question 1:** {first_question}";

pub const NEXT_QUESTION_TEMPLATE: &str =
    "Thank you for your answer! 👍\n\n**Question {number}:** {question}";

pub const COMPLETION_TEMPLATE: &str = "\
Excellent! You've completed all the technical questions. 🎉

**Interview Summary:**
{summary}
**Questions Completed:** {question_count}

Thank you for taking the time to complete this screening! \
Our recruitment team will review your responses and contact you within 2-3 business days \
if your profile matches our current openings.

Is there anything else you'd like to know about TalentScout or our process?";

pub const FAREWELL: &str = "\
Thank you for your interest in TalentScout! 🌟

Your information has been recorded and our team will be in touch soon.

Have a wonderful day, and good luck with your job search!";

pub const EXIT_GOODBYE: &str = "Thank you for your time! Have a great day! 👋";
