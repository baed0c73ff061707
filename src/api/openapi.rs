//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TestHub Server",
        version = "0.1.0",
        description = "API server for managing test configurations, test cases, test runs and configuration allocations"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        // Configuration endpoints
        api::configurations::list_configurations,
        api::configurations::get_configuration,
        api::configurations::create_configuration,
        api::configurations::update_configuration,
        api::configurations::delete_configuration,
        // Application endpoints
        api::applications::list_applications,
        api::applications::get_application,
        api::applications::create_application,
        api::applications::update_application,
        api::applications::delete_application,
        // Test case endpoints
        api::test_cases::list_test_cases,
        api::test_cases::get_test_case,
        api::test_cases::create_test_case,
        api::test_cases::update_test_case,
        api::test_cases::delete_test_case,
        // Test run endpoints
        api::test_runs::list_test_runs,
        api::test_runs::get_test_run,
        api::test_runs::create_test_run,
        api::test_runs::update_test_run,
        api::test_runs::delete_test_run,
        // Allocation endpoints
        api::allocations::list_allocations,
        api::allocations::create_allocation,
        api::allocations::create_allocations_bulk,
        api::allocations::delete_allocation,
        // Test result endpoints
        api::test_results::list_test_results,
        api::test_results::create_test_result,
        // Analytics endpoints
        api::analytics::get_stats,
        // Activity endpoints
        api::activity::list_activity,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            // Configurations
            models::ResourceStatus,
            models::ConfigurationType,
            models::CloudType,
            models::Configuration,
            models::NewConfiguration,
            models::ConfigurationPatch,
            // Applications
            models::Application,
            models::NewApplication,
            models::ApplicationPatch,
            // Test cases
            models::Priority,
            models::TestCase,
            models::NewTestCase,
            models::TestCasePatch,
            // Test runs
            models::RunStatus,
            models::TestRun,
            models::NewTestRun,
            models::TestRunPatch,
            // Allocations
            models::Allocation,
            models::NewAllocation,
            models::BulkAllocationsRequest,
            // Test results
            models::TestResult,
            models::NewTestResult,
            // Analytics
            models::ConfigurationStats,
            // Activity
            models::ActivityAction,
            models::ActivityLog,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Configurations", description = "Test configuration management"),
        (name = "Applications", description = "Application under test management"),
        (name = "Test Cases", description = "Test case management"),
        (name = "Test Runs", description = "Test run management"),
        (name = "Allocations", description = "Configuration allocations to test cases and runs"),
        (name = "Test Results", description = "Recorded test results"),
        (name = "Analytics", description = "Aggregate dashboard statistics"),
        (name = "Activity", description = "Recent activity feed")
    )
)]
pub struct ApiDoc;
