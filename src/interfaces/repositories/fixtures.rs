use chrono::{DateTime, Utc};

use crate::entities::{
    blog_post::{Author, BlogPost, Category, Tag},
    project::{Project, ProjectStatus},
};

/// Unparsable dates become the epoch, which store validation rejects.
fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

fn tag(name: &str, slug: &str, color: &str) -> Tag {
    Tag {
        name: name.to_string(),
        slug: slug.to_string(),
        color: color.to_string(),
    }
}

fn category(name: &str, slug: &str) -> Option<Category> {
    Some(Category {
        name: name.to_string(),
        slug: slug.to_string(),
    })
}

fn site_author() -> Author {
    Author {
        username: "cossettealexis".to_string(),
        first_name: "Cossette".to_string(),
        last_name: "Alexis".to_string(),
    }
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&w=1000&q=80")
}

const REACT_DJANGO_BODY: &str = "
# Building Modern Web Applications with React and Django

In this comprehensive guide, we'll explore how to build modern, scalable web applications using React for the frontend and Django for the backend API.

## Why React and Django?

React and Django make a powerful combination for full-stack development:

- **React**: Provides a dynamic, interactive user interface
- **Django**: Offers a robust, scalable backend with excellent ORM
- **Separation of Concerns**: Clean architecture with distinct frontend and backend

## Setting Up the Development Environment

First, let's set up our development environment...

## Creating the Django Backend

We'll start by creating our Django API...

## Building the React Frontend

Next, we'll build our React application...

## Deployment Strategies

Finally, we'll discuss deployment options...
";

const TAILWIND_BODY: &str = "
# Mastering Tailwind CSS: Tips and Best Practices

Tailwind CSS has revolutionized the way we think about CSS and styling web applications. In this post, we'll explore advanced techniques and best practices.

## Advanced Utility Classes

Learn about lesser-known utility classes that can speed up your development...

## Custom Components with @apply

While utility-first is great, sometimes you need custom components...

## Responsive Design Patterns

Tailwind makes responsive design intuitive...

## Performance Optimization

Keep your bundle size small with these techniques...
";

const NEXTJS_BODY: &str = "
# Getting Started with Next.js 14: App Router and Server Components

Next.js 14 introduces powerful new features that change how we build React applications. Let's explore the App Router and Server Components.

## The App Router

The new App Router provides a more intuitive way to handle routing...

## Server Components

Server Components allow us to render React components on the server...

## Data Fetching Patterns

Learn new patterns for fetching data in Next.js 14...

## Migration Guide

If you're coming from the Pages Router, here's how to migrate...
";

/// The published posts, newest first.
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Building Modern Web Applications with React and Django".to_string(),
            slug: "building-modern-web-applications-react-django".to_string(),
            excerpt: "Learn how to create full-stack applications using React for the frontend and Django for the backend API.".to_string(),
            content: REACT_DJANGO_BODY.to_string(),
            featured_image: unsplash("photo-1555066931-4365d14bab8c"),
            category: category("Web Development", "web-development"),
            tags: vec![
                tag("React", "react", "#61DAFB"),
                tag("Django", "django", "#092E20"),
                tag("Full Stack", "full-stack", "#FF6B6B"),
            ],
            published_at: at("2024-01-15T10:00:00Z"),
            reading_time: 8,
            views: 1250,
            author: site_author(),
        },
        BlogPost {
            id: 2,
            title: "Mastering Tailwind CSS: Tips and Best Practices".to_string(),
            slug: "mastering-tailwind-css-tips-best-practices".to_string(),
            excerpt: "Discover advanced techniques and best practices for using Tailwind CSS in your projects.".to_string(),
            content: TAILWIND_BODY.to_string(),
            featured_image: unsplash("photo-1507003211169-0a1dd7228f2d"),
            category: category("CSS", "css"),
            tags: vec![
                tag("Tailwind CSS", "tailwind-css", "#06B6D4"),
                tag("CSS", "css", "#1572B6"),
                tag("Frontend", "frontend", "#FF6B6B"),
            ],
            published_at: at("2024-01-10T14:30:00Z"),
            reading_time: 6,
            views: 890,
            author: site_author(),
        },
        BlogPost {
            id: 3,
            title: "Getting Started with Next.js 14: App Router and Server Components".to_string(),
            slug: "getting-started-nextjs-14-app-router-server-components".to_string(),
            excerpt: "Explore the new features in Next.js 14 including the App Router and Server Components.".to_string(),
            content: NEXTJS_BODY.to_string(),
            featured_image: unsplash("photo-1618477247222-acbdb0e159b3"),
            category: category("JavaScript", "javascript"),
            tags: vec![
                tag("Next.js", "nextjs", "#000000"),
                tag("React", "react", "#61DAFB"),
                tag("JavaScript", "javascript", "#F7DF1E"),
            ],
            published_at: at("2024-01-05T09:15:00Z"),
            reading_time: 10,
            views: 1580,
            author: site_author(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: u32,
    title: &str,
    slug: &str,
    description: &str,
    short_description: &str,
    photo: &str,
    repo: &str,
    live_url: &str,
    technologies: &[&str],
    status: ProjectStatus,
    featured: bool,
    created_at: &str,
    updated_at: &str,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        short_description: short_description.to_string(),
        image: unsplash(photo),
        github_url: Some(format!("https://github.com/cossettealexis/{repo}")),
        live_url: Some(live_url.to_string()),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        status,
        featured,
        created_at: at(created_at),
        updated_at: at(updated_at),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "E-Commerce Platform",
            "ecommerce-platform",
            "A full-stack e-commerce platform built with React, Django, and PostgreSQL. Features include user authentication, product management, shopping cart, payment integration, and admin dashboard.",
            "Full-stack e-commerce platform with React and Django",
            "photo-1556742049-0cfed4f6a45d",
            "ecommerce-platform",
            "https://ecommerce-demo.vercel.app",
            &["React", "Django", "PostgreSQL", "Stripe", "Tailwind CSS", "Docker"],
            ProjectStatus::Completed,
            true,
            "2023-12-01T00:00:00Z",
            "2024-01-15T00:00:00Z",
        ),
        project(
            2,
            "Task Management App",
            "task-management-app",
            "A collaborative task management application with real-time updates, drag-and-drop functionality, team collaboration features, and analytics dashboard.",
            "Collaborative task management with real-time updates",
            "photo-1611224923853-80b023f02d71",
            "task-manager",
            "https://taskmanager-demo.vercel.app",
            &["Next.js", "TypeScript", "Socket.io", "MongoDB", "Tailwind CSS"],
            ProjectStatus::Completed,
            true,
            "2023-11-15T00:00:00Z",
            "2024-01-10T00:00:00Z",
        ),
        project(
            3,
            "Weather Dashboard",
            "weather-dashboard",
            "A responsive weather dashboard that displays current weather conditions, forecasts, and weather maps using multiple weather APIs.",
            "Responsive weather dashboard with forecasts",
            "photo-1504608524841-42fe6f032b4b",
            "weather-dashboard",
            "https://weather-dashboard-demo.vercel.app",
            &["React", "OpenWeatherMap API", "Chart.js", "CSS Modules"],
            ProjectStatus::Completed,
            false,
            "2023-10-20T00:00:00Z",
            "2023-12-01T00:00:00Z",
        ),
        project(
            4,
            "Social Media Dashboard",
            "social-media-dashboard",
            "A comprehensive social media analytics dashboard that aggregates data from multiple platforms and provides insights and reporting.",
            "Social media analytics and reporting dashboard",
            "photo-1460925895917-afdab827c52f",
            "social-dashboard",
            "https://social-dashboard-demo.vercel.app",
            &["Vue.js", "Node.js", "Express", "MySQL", "D3.js"],
            ProjectStatus::Active,
            true,
            "2023-09-10T00:00:00Z",
            "2024-01-05T00:00:00Z",
        ),
        project(
            5,
            "Portfolio Website",
            "portfolio-website",
            "This portfolio website built with Next.js, TypeScript, and Tailwind CSS. Features include blog functionality, project showcase, and contact forms.",
            "Personal portfolio with blog and project showcase",
            "photo-1467232004584-a241de8bcf5d",
            "portfolio",
            "https://cossettealexis.github.io",
            &["Next.js", "TypeScript", "Tailwind CSS", "Framer Motion"],
            ProjectStatus::Active,
            false,
            "2024-01-01T00:00:00Z",
            "2024-01-20T00:00:00Z",
        ),
        project(
            6,
            "Chat Application",
            "chat-application",
            "Real-time chat application with rooms, file sharing, emoji support, and message history. Built with modern web technologies.",
            "Real-time chat with rooms and file sharing",
            "photo-1577563908411-5077b6dc7624",
            "chat-app",
            "https://chat-demo.vercel.app",
            &["React", "Socket.io", "Node.js", "MongoDB", "Material-UI"],
            ProjectStatus::Completed,
            false,
            "2023-08-15T00:00:00Z",
            "2023-10-01T00:00:00Z",
        ),
    ]
}
