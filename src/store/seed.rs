//! Hard-coded demo sample data. Everything here vanishes with the process;
//! there is no persistence layer behind it.

use chrono::NaiveDate;

use super::models::{
    Campaign, CampaignStatus, Donation, Opportunity, Volunteer, VolunteerStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: 1,
            name: "Clean Water Initiative".to_string(),
            description: "Provide clean drinking water to 500 families in rural areas.".to_string(),
            goal: 50000.0,
            raised: 32500.0,
            start_date: date(2025, 1, 15),
            status: CampaignStatus::Active,
        },
        Campaign {
            id: 2,
            name: "Education Support Program".to_string(),
            description: "Build schools and provide educational materials to underserved communities."
                .to_string(),
            goal: 75000.0,
            raised: 48000.0,
            start_date: date(2025, 2, 1),
            status: CampaignStatus::Active,
        },
        Campaign {
            id: 3,
            name: "Healthcare Outreach".to_string(),
            description: "Mobile healthcare clinics for remote villages.".to_string(),
            goal: 30000.0,
            raised: 30000.0,
            start_date: date(2024, 11, 1),
            status: CampaignStatus::Completed,
        },
    ]
}

pub fn donations() -> Vec<Donation> {
    vec![
        Donation {
            id: 1,
            campaign: "Clean Water Initiative".to_string(),
            amount: 100.0,
            date: date(2025, 1, 15),
        },
        Donation {
            id: 2,
            campaign: "Education for All".to_string(),
            amount: 250.0,
            date: date(2025, 2, 3),
        },
        Donation {
            id: 3,
            campaign: "Green Planet Foundation".to_string(),
            amount: 50.0,
            date: date(2025, 2, 28),
        },
    ]
}

pub fn volunteers() -> Vec<Volunteer> {
    vec![
        Volunteer {
            id: 1,
            name: "Sarah Johnson".to_string(),
            email: "sarah@email.com".to_string(),
            role: "Teaching Assistant".to_string(),
            skills: "Education, Child Care".to_string(),
            start_date: date(2025, 1, 15),
            end_date: Some(date(2025, 6, 15)),
            status: VolunteerStatus::Active,
        },
        Volunteer {
            id: 2,
            name: "Michael Chen".to_string(),
            email: "michael@email.com".to_string(),
            role: "Water Engineer".to_string(),
            skills: "Engineering, Project Management".to_string(),
            start_date: date(2025, 2, 1),
            end_date: Some(date(2025, 8, 1)),
            status: VolunteerStatus::Active,
        },
        Volunteer {
            id: 3,
            name: "Emma Davis".to_string(),
            email: "emma@email.com".to_string(),
            role: "Healthcare Worker".to_string(),
            skills: "Nursing, First Aid".to_string(),
            start_date: date(2024, 10, 1),
            end_date: Some(date(2025, 1, 1)),
            status: VolunteerStatus::Completed,
        },
        Volunteer {
            id: 4,
            name: "Current User".to_string(),
            email: "user@email.com".to_string(),
            role: "General Volunteer".to_string(),
            skills: "Community Service, Event Organization".to_string(),
            start_date: date(2025, 3, 1),
            end_date: Some(date(2025, 9, 1)),
            status: VolunteerStatus::Approved,
        },
    ]
}

pub fn opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: 1,
            ngo: "Clean Water Initiative".to_string(),
            title: "Community Outreach Coordinator".to_string(),
            description: "Help us engage with local communities to identify water needs and coordinate installation projects."
                .to_string(),
            location: "Rural Kenya".to_string(),
            duration: "6 months".to_string(),
            positions: 3,
        },
        Opportunity {
            id: 2,
            ngo: "Education for All".to_string(),
            title: "English Teacher".to_string(),
            description: "Teach English to children in underserved communities and help develop educational materials."
                .to_string(),
            location: "Southeast Asia".to_string(),
            duration: "1 year".to_string(),
            positions: 5,
        },
        Opportunity {
            id: 3,
            ngo: "Green Planet Foundation".to_string(),
            title: "Environmental Educator".to_string(),
            description: "Conduct workshops on sustainability and lead tree-planting initiatives in schools."
                .to_string(),
            location: "South America".to_string(),
            duration: "3 months".to_string(),
            positions: 2,
        },
    ]
}
