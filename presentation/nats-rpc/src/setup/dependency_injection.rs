use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_deleted::GetDeletedProductsUseCaseImpl;
use business::application::product::soft_delete::SoftDeleteProductUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::product::validate::ValidateProductsUseCaseImpl;
use business::domain::shared::id_generator::UuidV4Generator;

use crate::api::health::routes::HealthApi;
use crate::rpc::product::router::ProductRouter;

pub struct DependencyContainer {
    pub pool: sqlx::PgPool,
    pub product_router: Arc<ProductRouter>,
    pub health_api: HealthApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new(pool.clone());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let id_generator = Arc::new(UuidV4Generator);

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            id_generator,
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let soft_delete_use_case = Arc::new(SoftDeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_deleted_use_case = Arc::new(GetDeletedProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let validate_use_case = Arc::new(ValidateProductsUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_router = Arc::new(ProductRouter::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            soft_delete_use_case,
            get_deleted_use_case,
            validate_use_case,
        ));

        Self {
            pool,
            product_router,
            health_api,
        }
    }
}
