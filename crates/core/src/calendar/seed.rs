//! Fixture events preloaded by the demo calendar.
//!
//! Covers 2025-03-09 through 2025-04-05. Every other day is left to the
//! generator.

use super::date_key::DateKey;
use super::types::Event;

/// (date key, id, title, time, image number, description)
type SeedRow = (&'static str, &'static str, &'static str, &'static str, u32, &'static str);

#[rustfmt::skip]
const SEED_ROWS: &[SeedRow] = &[
    ("2025-03-09", "event-17", "Weekly Planning", "09:00 AM", 29, "Plan tasks and priorities for the upcoming week."),
    ("2025-03-09", "event-17a", "Client Onboarding", "02:00 PM", 30, "Onboard new client and discuss project requirements."),
    ("2025-03-10", "event-18", "Product Backlog Grooming", "10:00 AM", 31, "Review and prioritize product backlog items."),
    ("2025-03-10", "event-18a", "Marketing Brainstorm", "01:30 PM", 32, "Generate ideas for upcoming marketing campaigns."),
    ("2025-03-11", "event-19", "Sprint Planning", "09:30 AM", 33, "Plan tasks and goals for the upcoming sprint."),
    ("2025-03-11", "event-19a", "UX Research Review", "03:00 PM", 34, "Review findings from recent user research studies."),
    ("2025-03-12", "event-20", "Technical Architecture Review", "11:00 AM", 35, "Review system architecture and discuss improvements."),
    ("2025-03-12", "event-20a", "Team Lunch", "12:30 PM", 36, "Casual team lunch to foster collaboration."),
    ("2025-03-13", "event-21", "Feature Demo", "10:00 AM", 37, "Demo new features to stakeholders for feedback."),
    ("2025-03-13", "event-21a", "Code Refactoring Session", "02:00 PM", 38, "Collaborative session to improve code quality."),
    ("2025-03-14", "event-22", "Quarterly Review", "09:00 AM", 39, "Review company performance and set goals for next quarter."),
    ("2025-03-14", "event-22a", "Team Building Workshop", "01:00 PM", 40, "Interactive workshop to improve team dynamics."),
    ("2025-03-15", "event-23", "Product Strategy Session", "10:30 AM", 41, "Discuss long-term product strategy and roadmap."),
    ("2025-03-15", "event-23a", "Code Review Session", "02:30 PM", 42, "Review recent code changes and discuss improvements."),
    ("2025-03-15", "event-23b", "End of Week Wrap-up", "04:00 PM", 43, "Review week's accomplishments and plan for next week."),
    ("2025-03-16", "event-6", "Project Kickoff", "10:00 AM", 1, "Start new project with marketing team to develop campaign strategy."),
    ("2025-03-16", "event-6a", "Lunch with Investors", "12:30 PM", 2, "Discuss funding opportunities and business growth plans."),
    ("2025-03-17", "event-7", "Code Review", "01:00 PM", 3, "Review recent feature implementation with development team."),
    ("2025-03-17", "event-7a", "UI Design Review", "03:30 PM", 4, "Review new UI designs with the design team."),
    ("2025-03-18", "event-8", "Design Workshop", "09:30 AM", 10, "Collaborative session to refine UI/UX designs for new product."),
    ("2025-03-18", "event-8a", "Marketing Strategy Meeting", "02:00 PM", 11, "Plan Q2 marketing campaigns and budget allocation."),
    ("2025-03-19", "event-9", "Client Presentation", "03:00 PM", 12, "Present quarterly results and future plans to key clients."),
    ("2025-03-20", "event-10", "Team Building", "11:00 AM", 13, "Outdoor activities to strengthen team collaboration and communication."),
    ("2025-03-21", "event-1", "Coffee with Alex", "09:00 AM", 5, "Meet with Alex to brainstorm ideas for the upcoming product launch."),
    ("2025-03-21", "event-2", "Team Standup", "02:00 PM", 6, "Weekly standup meeting with the dev team."),
    ("2025-03-21", "event-2a", "Product Roadmap Review", "04:00 PM", 7, "Review and adjust product roadmap for next quarter."),
    ("2025-03-22", "event-3", "Yoga Session", "12:00 PM", 14, "Join for a relaxing yoga session to reduce stress and improve mindfulness."),
    ("2025-03-22", "event-4", "Product Demo", "03:30 PM", 15, "Demo of UI improvements and performance optimizations to gather stakeholder feedback."),
    ("2025-03-23", "event-5", "Client Meeting", "11:30 AM", 16, "Review project progress, timeline adjustments, and outline roadmap for next quarter with the client."),
    ("2025-03-23", "event-5a", "Team Retrospective", "02:00 PM", 22, "Review recent sprint and identify areas for improvement."),
    ("2025-03-23", "event-5b", "Product Roadmap Review", "04:30 PM", 44, "Review and adjust product roadmap for next quarter."),
    ("2025-03-24", "event-11", "Strategy Meeting", "10:30 AM", 17, "Discuss long-term business strategy and growth opportunities."),
    ("2025-03-24", "event-11a", "Product Roadmap Planning", "01:30 PM", 23, "Plan product features and releases for the next quarter."),
    ("2025-03-24", "event-11b", "Investor Relations Update", "03:30 PM", 45, "Prepare materials for upcoming investor meeting."),
    ("2025-03-25", "event-12", "Training Session", "02:00 PM", 18, "Workshop on new development tools and technologies."),
    ("2025-03-25", "event-12a", "Code Quality Review", "04:00 PM", 24, "Review code quality metrics and discuss improvements."),
    ("2025-03-26", "event-13", "Product Testing", "09:00 AM", 19, "User testing session for new product features."),
    ("2025-03-26", "event-13a", "Marketing Campaign Review", "11:00 AM", 25, "Review performance of current marketing campaigns."),
    ("2025-03-26", "event-13b", "UI/UX Design Review", "02:00 PM", 46, "Review latest UI/UX designs with the design team."),
    ("2025-03-27", "event-14", "Budget Review", "11:00 AM", 20, "Quarterly financial review and budget planning session."),
    ("2025-03-27", "event-14a", "Investor Update", "03:00 PM", 26, "Provide quarterly update to investors on company performance."),
    ("2025-03-28", "event-15", "Networking Event", "06:00 PM", 21, "Industry networking event to connect with potential partners."),
    ("2025-03-28", "event-15a", "Team Dinner", "08:00 PM", 27, "Celebrate recent successes with the team."),
    ("2025-03-29", "event-16", "Project Wrap-up", "10:00 AM", 8, "Final review and documentation of completed project."),
    ("2025-03-29", "event-16a", "Team Celebration", "06:00 PM", 9, "Celebrate successful project completion with the team."),
    ("2025-03-29", "event-16b", "Post-Mortem Analysis", "02:00 PM", 28, "Analyze project outcomes and document lessons learned."),
    ("2025-03-30", "event-24", "Monthly Review", "10:00 AM", 47, "Review March's accomplishments and set goals for April."),
    ("2025-03-30", "event-24a", "Team Retrospective", "02:00 PM", 48, "Review team performance and identify areas for improvement."),
    ("2025-03-31", "event-25", "Quarterly Planning", "09:30 AM", 49, "Plan goals and initiatives for Q2."),
    ("2025-03-31", "event-25a", "Product Roadmap Review", "01:30 PM", 50, "Review and adjust product roadmap for Q2."),
    ("2025-04-01", "event-26", "April Fools Team Event", "11:00 AM", 51, "Fun team-building activities to celebrate April Fools' Day."),
    ("2025-04-01", "event-26a", "New Feature Brainstorm", "02:00 PM", 52, "Generate ideas for new product features."),
    ("2025-04-02", "event-27", "Code Review", "10:00 AM", 53, "Review recent code changes and discuss improvements."),
    ("2025-04-02", "event-27a", "UI/UX Design Review", "02:00 PM", 54, "Review latest UI/UX designs with the design team."),
    ("2025-04-03", "event-28", "Client Meeting", "11:00 AM", 55, "Discuss project progress and next steps with key client."),
    ("2025-04-03", "event-28a", "Team Lunch", "12:30 PM", 56, "Casual team lunch to foster collaboration."),
    ("2025-04-04", "event-29", "Sprint Planning", "09:30 AM", 57, "Plan tasks and goals for the upcoming sprint."),
    ("2025-04-04", "event-29a", "Code Refactoring Session", "02:00 PM", 58, "Collaborative session to improve code quality."),
    ("2025-04-05", "event-30", "Weekly Wrap-up", "10:00 AM", 59, "Review week's accomplishments and plan for next week."),
    ("2025-04-05", "event-30a", "Team Building Activity", "01:00 PM", 60, "Interactive activity to improve team dynamics."),
    ("2025-04-05", "event-30b", "End of Week Celebration", "04:00 PM", 61, "Celebrate the week's successes with the team."),
];

/// Returns the fixture events grouped by day, in fixture order.
pub fn seed_events() -> Vec<(DateKey, Vec<Event>)> {
    let mut days: Vec<(DateKey, Vec<Event>)> = Vec::new();

    for (date, id, title, time, image, description) in SEED_ROWS {
        let Ok(date_key) = DateKey::parse(date) else {
            tracing::warn!(%date, %id, "Skipping seed event with invalid date key");
            continue;
        };

        let event = Event::new(*id, *title, *time, date_key)
            .with_description(*description)
            .with_image_url(format!("https://picsum.photos/1920/1080?random={image}"));

        match days.last_mut() {
            Some((last_key, events)) if *last_key == date_key => events.push(event),
            _ => days.push((date_key, vec![event])),
        }
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_covers_four_weeks() {
        let days = seed_events();

        assert_eq!(days.len(), 28);
        assert_eq!(days.first().unwrap().0.to_string(), "2025-03-09");
        assert_eq!(days.last().unwrap().0.to_string(), "2025-04-05");
    }

    #[test]
    fn test_seed_ids_are_unique_and_valid() {
        let mut seen = HashSet::new();
        for (date_key, events) in seed_events() {
            for event in events {
                assert!(seen.insert(event.id.clone()), "duplicate {}", event.id);
                assert_eq!(event.date_key, date_key);
                assert!(event.validate().is_ok(), "{event:?}");
            }
        }
        assert_eq!(seen.len(), 61);
    }

    #[test]
    fn test_project_kickoff_is_on_march_16() {
        let days = seed_events();
        let (_, events) = days
            .iter()
            .find(|(key, _)| key.to_string() == "2025-03-16")
            .unwrap();

        assert_eq!(events[0].id, "event-6");
        assert_eq!(events[0].title, "Project Kickoff");
        assert_eq!(events[0].time, "10:00 AM");
    }
}
